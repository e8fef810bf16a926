//! Internal transfers between wallets. The net amount is always the
//! transfer amount minus fees; it is recomputed on every submit and can
//! never be typed directly.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Transfer, RIYAL_SHORT, TRANSFER_STATUSES, WALLET_OPTIONS};
use crate::store::InsertPolicy;
use crate::summary::{sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Transfer> {
    PageSpec {
        slug: "transfers",
        title: "التحويلات",
        id_prefix: "TRF-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::transfers,
        haystack: |t| format!("{} {} {} {}", t.id, t.from, t.to, t.description),
        filters: vec![FilterSpec {
            all_label: "كل الحالات",
            options: || TRANSFER_STATUSES.iter().map(|s| s.to_string()).collect(),
            value: |t| t.status.clone(),
        }],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |t| t.id.clone() },
            ColumnSpec { header: "التاريخ", cell: |t| format!("{} {}", t.date, t.time) },
            ColumnSpec { header: "من", cell: |t| t.from.clone() },
            ColumnSpec { header: "إلى", cell: |t| t.to.clone() },
            ColumnSpec { header: "المبلغ", cell: |t| fmt::currency(t.amount, RIYAL_SHORT) },
            ColumnSpec { header: "الرسوم", cell: |t| fmt::currency(t.fees, RIYAL_SHORT) },
            ColumnSpec { header: "الصافي", cell: |t| fmt::currency(t.net, RIYAL_SHORT) },
            ColumnSpec { header: "الحالة", cell: |t| t.status.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Transfer]) -> Vec<Stat> {
    let amount = sum_by(records, |t| t.amount);
    let fees = sum_by(records, |t| t.fees);
    let net = sum_by(records, |t| t.net);
    vec![
        Stat::new("عدد التحويلات", records.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي المبالغ", fmt::currency(amount, RIYAL_SHORT), Tone::Info),
        Stat::new("إجمالي الرسوم", fmt::currency(fees, RIYAL_SHORT), Tone::Warning),
        Stat::new("صافي المحول", fmt::currency(net, RIYAL_SHORT), Tone::Positive),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::selector("from", "من المحفظة", WALLET_OPTIONS),
        FormField::selector("to", "إلى المحفظة", WALLET_OPTIONS),
        FormField::number("amount", "المبلغ"),
        FormField::number("fees", "الرسوم"),
        FormField::text("description", "الوصف"),
        FormField::selector("status", "الحالة", TRANSFER_STATUSES),
        FormField::date("date", "التاريخ"),
    ])
}

fn prefill(transfer: &Transfer) -> Form {
    let mut form = blank();
    form.set_value("from", &transfer.from);
    form.set_value("to", &transfer.to);
    form.set_value("amount", fmt::editable(transfer.amount));
    form.set_value("fees", fmt::editable(transfer.fees));
    form.set_value("description", &transfer.description);
    form.set_value("status", &transfer.status);
    form.set_value("date", &transfer.date);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Transfer, Vec<FieldError>> {
    let mut errors = Vec::new();
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    let fees = form::gather(
        &mut errors,
        form::parse_amount_or(form, "fees", "الرسوم", 0.0),
    );
    let from = form.value("from").to_string();
    let to = form.value("to").to_string();
    if from == to {
        errors.push(FieldError::new("إلى المحفظة", "لا يمكن التحويل لنفس المحفظة"));
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    let amount = amount.unwrap_or_default();
    let fees = fees.unwrap_or_default();
    Ok(Transfer {
        id: id.to_string(),
        date: form::date_or_today(form, "date"),
        time: chrono::Local::now().format("%H:%M").to_string(),
        from,
        to,
        amount,
        fees,
        net: amount - fees,
        description: form::optional(form, "description", "-"),
        status: form.value("status").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_is_amount_minus_fees() {
        let mut form = blank();
        form.set_value("to", "بنك الراجحي");
        form.set_value("amount", "5000");
        form.set_value("fees", "10");
        let transfer = build(&form, "TRF-004").unwrap();
        assert_eq!(transfer.net, 4990.0);
    }

    #[test]
    fn test_same_wallet_transfer_is_rejected() {
        let mut form = blank();
        form.set_value("amount", "100");
        let errors = build(&form, "TRF-004").unwrap_err();
        assert_eq!(errors[0].reason, "لا يمكن التحويل لنفس المحفظة");
    }

    #[test]
    fn test_fees_default_to_zero() {
        let mut form = blank();
        form.set_value("to", "البنك الأهلي");
        form.set_value("amount", "750");
        let transfer = build(&form, "TRF-004").unwrap();
        assert_eq!(transfer.fees, 0.0);
        assert_eq!(transfer.net, 750.0);
    }
}
