//! Activity audit log: who did what, where, and from which address.
//! Append-only in spirit; the dashboard only reads it.

use super::{ColumnSpec, FilterSpec, PageSpec};
use crate::fixtures;
use crate::models::{ActivityEntry, ACTIVITY_ACTIONS, ACTIVITY_SECTIONS};
use crate::store::InsertPolicy;
use crate::summary::{count_where, Stat, Tone};

pub fn spec() -> PageSpec<ActivityEntry> {
    PageSpec {
        slug: "activity",
        title: "سجل النشاطات",
        id_prefix: "ACT-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::activity,
        haystack: |a| format!("{} {} {} {}", a.id, a.user, a.description, a.ip),
        filters: vec![
            FilterSpec {
                all_label: "كل الأقسام",
                options: || ACTIVITY_SECTIONS.iter().map(|s| s.to_string()).collect(),
                value: |a| a.section.clone(),
            },
            FilterSpec {
                all_label: "كل العمليات",
                options: || ACTIVITY_ACTIONS.iter().map(|s| s.to_string()).collect(),
                value: |a| a.action.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |a| a.id.clone() },
            ColumnSpec { header: "المستخدم", cell: |a| a.user.clone() },
            ColumnSpec { header: "القسم", cell: |a| a.section.clone() },
            ColumnSpec { header: "العملية", cell: |a| a.action.clone() },
            ColumnSpec { header: "الوصف", cell: |a| a.description.clone() },
            ColumnSpec { header: "التاريخ", cell: |a| format!("{} {}", a.date, a.time) },
            ColumnSpec { header: "العنوان", cell: |a| a.ip.clone() },
        ],
        form: None,
    }
}

fn stats(records: &[ActivityEntry]) -> Vec<Stat> {
    let logins = count_where(records, |a| a.action == "تسجيل دخول");
    let deletions = count_where(records, |a| a.action == "حذف");
    let mut users: Vec<&str> = records.iter().map(|a| a.user.as_str()).collect();
    users.sort();
    users.dedup();
    vec![
        Stat::new("عدد السجلات", records.len().to_string(), Tone::Neutral),
        Stat::new("تسجيلات الدخول", logins.to_string(), Tone::Info),
        Stat::new("عمليات الحذف", deletions.to_string(), Tone::Warning),
        Stat::new("مستخدمون نشطون", users.len().to_string(), Tone::Positive),
    ]
}
