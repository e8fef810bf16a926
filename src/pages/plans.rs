//! Subscription plans. A static catalog page: browsable and exportable,
//! never edited from the dashboard.

use super::{ColumnSpec, PageSpec};
use crate::fixtures;
use crate::fmt;
use crate::models::{Plan, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{Stat, Tone};

pub fn spec() -> PageSpec<Plan> {
    PageSpec {
        slug: "plans",
        title: "باقات الاشتراك",
        id_prefix: "PLN-",
        id_width: 3,
        insert: InsertPolicy::Tail,
        fixtures: fixtures::plans,
        haystack: |p| format!("{} {} {}", p.id, p.name, p.description),
        filters: vec![],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |p| p.id.clone() },
            ColumnSpec { header: "الباقة", cell: |p| p.name.clone() },
            ColumnSpec { header: "شهريا", cell: |p| fmt::currency(p.price_monthly, RIYAL) },
            ColumnSpec { header: "سنويا", cell: |p| fmt::currency(p.price_yearly, RIYAL) },
            ColumnSpec { header: "الوصف", cell: |p| p.description.clone() },
            ColumnSpec {
                header: "مميزة",
                cell: |p| if p.featured { "نعم".into() } else { "-".into() },
            },
            ColumnSpec { header: "المزايا", cell: |p| p.features.join("، ") },
        ],
        form: None,
    }
}

fn stats(records: &[Plan]) -> Vec<Stat> {
    let cheapest = records
        .iter()
        .map(|p| p.price_monthly)
        .fold(f64::INFINITY, f64::min);
    let featured = records
        .iter()
        .find(|p| p.featured)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".into());
    vec![
        Stat::new("عدد الباقات", records.len().to_string(), Tone::Neutral),
        Stat::new(
            "تبدأ من",
            if records.is_empty() {
                "-".into()
            } else {
                fmt::currency(cheapest, RIYAL)
            },
            Tone::Info,
        ),
        Stat::new("الباقة المقترحة", featured, Tone::Positive),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_read_only() {
        assert!(spec().form.is_none());
    }

    #[test]
    fn test_featured_plan_is_surfaced() {
        let stats = stats(&fixtures::plans());
        assert_eq!(stats[1].value, "99 ريال");
        assert_eq!(stats[2].value, "الاحترافية");
    }
}
