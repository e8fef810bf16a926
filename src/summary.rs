//! Summary-card aggregation: counts, sums, and guarded ratios computed from
//! scratch over a record slice (or a filtered view of it) on every call.

/// Visual tone of a stat card, mapped to colors by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Warning,
    Negative,
    Info,
}

/// One summary card: label, pre-formatted value, tone.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub tone: Tone,
}

impl Stat {
    pub fn new(label: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            tone,
        }
    }
}

pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(value).sum()
}

pub fn sum_where<T>(items: &[T], pred: impl Fn(&T) -> bool, value: impl Fn(&T) -> f64) -> f64 {
    items.iter().filter(|i| pred(i)).map(value).sum()
}

pub fn count_where<T>(items: &[T], pred: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|i| pred(i)).count()
}

/// Percentage ratio with a guarded denominator: profit margin over zero
/// sales renders the placeholder, never NaN or infinity.
pub fn ratio_pct(numerator: f64, denominator: f64) -> String {
    if denominator == 0.0 {
        "—".to_string()
    } else {
        format!("{:.1}%", numerator / denominator * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::currency;

    struct Txn {
        kind: &'static str,
        amount: f64,
    }

    fn txns() -> Vec<Txn> {
        vec![
            Txn { kind: "إيداع", amount: 15000.0 },
            Txn { kind: "سحب", amount: 5000.0 },
            Txn { kind: "إيداع", amount: 8500.0 },
        ]
    }

    fn summarize(items: &[Txn]) -> Vec<Stat> {
        let deposits = sum_where(items, |t| t.kind == "إيداع", |t| t.amount);
        let withdrawals = sum_where(items, |t| t.kind == "سحب", |t| t.amount);
        vec![
            Stat::new("إجمالي الحركات", items.len().to_string(), Tone::Neutral),
            Stat::new("الإيداعات", currency(deposits, "ر.س"), Tone::Positive),
            Stat::new("السحوبات", currency(withdrawals, "ر.س"), Tone::Negative),
            Stat::new("الصافي", currency(deposits - withdrawals, "ر.س"), Tone::Info),
        ]
    }

    #[test]
    fn test_partitioned_sums() {
        let data = txns();
        let stats = summarize(&data);
        assert_eq!(stats[1].value, "23,500 ر.س");
        assert_eq!(stats[2].value, "5,000 ر.س");
        assert_eq!(stats[3].value, "18,500 ر.س");
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let data = txns();
        assert_eq!(summarize(&data), summarize(&data));
    }

    #[test]
    fn test_empty_collection_yields_zeros_not_nan() {
        let stats = summarize(&[]);
        assert_eq!(stats[0].value, "0");
        assert_eq!(stats[1].value, "0 ر.س");
        for stat in &stats {
            assert!(!stat.value.contains("NaN"));
            assert!(!stat.value.contains("inf"));
        }
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio_pct(500.0, 0.0), "—");
        assert_eq!(ratio_pct(0.0, 0.0), "—");
        assert_eq!(ratio_pct(250.0, 1000.0), "25.0%");
    }
}
