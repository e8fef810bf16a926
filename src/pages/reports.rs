//! Monthly performance report: sales, cost, derived profit, and a margin
//! that degrades to a placeholder when a month has no sales.

use super::{ColumnSpec, PageSpec};
use crate::fixtures;
use crate::fmt;
use crate::models::{ReportRow, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{ratio_pct, sum_by, Stat, Tone};

pub fn spec() -> PageSpec<ReportRow> {
    PageSpec {
        slug: "reports",
        title: "التقارير",
        id_prefix: "",
        id_width: 0,
        insert: InsertPolicy::Tail,
        fixtures: fixtures::report_rows,
        haystack: |r| r.month.clone(),
        filters: vec![],
        stats,
        columns: vec![
            ColumnSpec { header: "الشهر", cell: |r| r.month.clone() },
            ColumnSpec { header: "المبيعات", cell: |r| fmt::currency(r.sales, RIYAL) },
            ColumnSpec { header: "التكاليف", cell: |r| fmt::currency(r.cost, RIYAL) },
            ColumnSpec { header: "الربح", cell: |r| fmt::currency(r.profit(), RIYAL) },
            ColumnSpec { header: "الهامش", cell: |r| r.margin() },
        ],
        form: None,
    }
}

fn stats(records: &[ReportRow]) -> Vec<Stat> {
    let sales = sum_by(records, |r| r.sales);
    let cost = sum_by(records, |r| r.cost);
    let profit = sales - cost;
    vec![
        Stat::new("إجمالي المبيعات", fmt::currency(sales, RIYAL), Tone::Info),
        Stat::new("إجمالي التكاليف", fmt::currency(cost, RIYAL), Tone::Negative),
        Stat::new("صافي الربح", fmt::currency(profit, RIYAL), Tone::Positive),
        Stat::new("هامش الربح", ratio_pct(profit, sales), Tone::Neutral),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_column_guards_zero_sales() {
        let rows = vec![ReportRow { month: "يناير".into(), sales: 0.0, cost: 800.0 }];
        let cell = (spec().columns[4].cell)(&rows[0]);
        assert_eq!(cell, "—");
    }

    #[test]
    fn test_overall_margin_with_no_rows_is_placeholder() {
        let stats = stats(&[]);
        assert_eq!(stats[3].value, "—");
    }

    #[test]
    fn test_profit_totals() {
        let stats = stats(&fixtures::report_rows());
        assert_eq!(stats[0].value, "1,137,700 ريال");
        assert_eq!(stats[1].value, "758,500 ريال");
        assert_eq!(stats[2].value, "379,200 ريال");
    }
}
