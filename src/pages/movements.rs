//! Unified money-movement log across all accounts, with running balances.
//! Read-only; every entry originates from another page's mutation.

use super::{ColumnSpec, FilterSpec, PageSpec};
use crate::fixtures;
use crate::fmt;
use crate::models::{MovementEntry, MOVEMENT_CATEGORIES, MOVEMENT_KINDS, RIYAL_SHORT, WALLET_OPTIONS};
use crate::store::InsertPolicy;
use crate::summary::{sum_where, Stat, Tone};

pub fn spec() -> PageSpec<MovementEntry> {
    PageSpec {
        slug: "movements",
        title: "سجل الحركات",
        id_prefix: "MOV-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::movements,
        haystack: |m| format!("{} {} {}", m.id, m.account, m.description),
        filters: vec![
            FilterSpec {
                all_label: "كل الحسابات",
                options: || WALLET_OPTIONS.iter().map(|s| s.to_string()).collect(),
                value: |m| m.account.clone(),
            },
            FilterSpec {
                all_label: "كل الأنواع",
                options: || MOVEMENT_KINDS.iter().map(|s| s.to_string()).collect(),
                value: |m| m.kind.clone(),
            },
            FilterSpec {
                all_label: "كل الفئات",
                options: || MOVEMENT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
                value: |m| m.category.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |m| m.id.clone() },
            ColumnSpec { header: "التاريخ", cell: |m| format!("{} {}", m.date, m.time) },
            ColumnSpec { header: "الحساب", cell: |m| m.account.clone() },
            ColumnSpec { header: "النوع", cell: |m| m.kind.clone() },
            ColumnSpec { header: "المبلغ", cell: |m| fmt::currency(m.amount, RIYAL_SHORT) },
            ColumnSpec {
                header: "الرصيد قبل",
                cell: |m| fmt::currency(m.before_balance, RIYAL_SHORT),
            },
            ColumnSpec {
                header: "الرصيد بعد",
                cell: |m| fmt::currency(m.after_balance, RIYAL_SHORT),
            },
            ColumnSpec { header: "الوصف", cell: |m| m.description.clone() },
            ColumnSpec { header: "الفئة", cell: |m| m.category.clone() },
        ],
        form: None,
    }
}

fn stats(records: &[MovementEntry]) -> Vec<Stat> {
    let deposits = sum_where(records, |m| m.kind == "إيداع", |m| m.amount);
    let withdrawals = sum_where(records, |m| m.kind == "سحب", |m| m.amount);
    vec![
        Stat::new("عدد الحركات", records.len().to_string(), Tone::Neutral),
        Stat::new("الإيداعات", fmt::currency(deposits, RIYAL_SHORT), Tone::Positive),
        Stat::new("السحوبات", fmt::currency(withdrawals, RIYAL_SHORT), Tone::Negative),
        Stat::new(
            "الصافي",
            fmt::currency(deposits - withdrawals, RIYAL_SHORT),
            Tone::Info,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_read_only() {
        assert!(spec().form.is_none());
    }

    #[test]
    fn test_net_flow() {
        let stats = stats(&fixtures::movements());
        assert_eq!(stats[1].value, "21,200 ر.س");
        assert_eq!(stats[2].value, "41,500 ر.س");
        assert_eq!(stats[3].value, "-20,300 ر.س");
    }
}
