//! Collected payments, filterable by status and method and tied back to
//! their invoice and receiving wallet.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Payment, PAYMENT_METHODS, PAYMENT_STATUSES, RIYAL, WALLET_OPTIONS};
use crate::store::InsertPolicy;
use crate::summary::{sum_by, sum_where, Stat, Tone};

pub fn spec() -> PageSpec<Payment> {
    PageSpec {
        slug: "payments",
        title: "المدفوعات",
        id_prefix: "PAY-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::payments,
        haystack: |p| format!("{} {} {} {}", p.id, p.invoice, p.client, p.reference),
        filters: vec![
            FilterSpec {
                all_label: "كل الحالات",
                options: || PAYMENT_STATUSES.iter().map(|s| s.to_string()).collect(),
                value: |p| p.status.clone(),
            },
            FilterSpec {
                all_label: "كل طرق الدفع",
                options: || PAYMENT_METHODS.iter().map(|s| s.to_string()).collect(),
                value: |p| p.method.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |p| p.id.clone() },
            ColumnSpec { header: "الفاتورة", cell: |p| p.invoice.clone() },
            ColumnSpec { header: "العميل", cell: |p| p.client.clone() },
            ColumnSpec { header: "المبلغ", cell: |p| fmt::currency(p.amount, RIYAL) },
            ColumnSpec { header: "طريقة الدفع", cell: |p| p.method.clone() },
            ColumnSpec { header: "المحفظة", cell: |p| p.wallet.clone() },
            ColumnSpec { header: "الحالة", cell: |p| p.status.clone() },
            ColumnSpec { header: "التاريخ", cell: |p| p.date.clone() },
            ColumnSpec { header: "المرجع", cell: |p| p.reference.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Payment]) -> Vec<Stat> {
    let total = sum_by(records, |p| p.amount);
    let complete = sum_where(records, |p| p.status == "مكتملة", |p| p.amount);
    let processing = sum_where(records, |p| p.status == "قيد المعالجة", |p| p.amount);
    vec![
        Stat::new("عدد المدفوعات", records.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي المدفوعات", fmt::currency(total, RIYAL), Tone::Info),
        Stat::new("مكتملة", fmt::currency(complete, RIYAL), Tone::Positive),
        Stat::new("قيد المعالجة", fmt::currency(processing, RIYAL), Tone::Warning),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("invoice", "رقم الفاتورة"),
        FormField::text("client", "اسم العميل"),
        FormField::number("amount", "المبلغ"),
        FormField::selector("method", "طريقة الدفع", PAYMENT_METHODS),
        FormField::selector("wallet", "المحفظة", WALLET_OPTIONS),
        FormField::selector("status", "الحالة", PAYMENT_STATUSES),
        FormField::date("date", "التاريخ"),
        FormField::text("reference", "المرجع"),
    ])
}

fn prefill(payment: &Payment) -> Form {
    let mut form = blank();
    form.set_value("invoice", &payment.invoice);
    form.set_value("client", &payment.client);
    form.set_value("amount", fmt::editable(payment.amount));
    form.set_value("method", &payment.method);
    form.set_value("wallet", &payment.wallet);
    form.set_value("status", &payment.status);
    form.set_value("date", &payment.date);
    form.set_value("reference", &payment.reference);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Payment, Vec<FieldError>> {
    let mut errors = Vec::new();
    let invoice = form::gather(&mut errors, form::require(form, "invoice", "رقم الفاتورة"));
    let client = form::gather(&mut errors, form::require(form, "client", "اسم العميل"));
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Payment {
        id: id.to_string(),
        invoice: invoice.unwrap_or_default(),
        client: client.unwrap_or_default(),
        amount: amount.unwrap_or_default(),
        method: form.value("method").to_string(),
        wallet: form.value("wallet").to_string(),
        status: form.value("status").to_string(),
        date: form::date_or_today(form, "date"),
        reference: form::optional(form, "reference", "-"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_split_covers_total() {
        let stats = stats(&fixtures::payments());
        assert_eq!(stats[1].value, "41,750 ريال");
        assert_eq!(stats[2].value, "27,750 ريال");
        assert_eq!(stats[3].value, "14,000 ريال");
    }

    #[test]
    fn test_build_defaults_reference() {
        let mut form = blank();
        form.set_value("invoice", "INV-002");
        form.set_value("client", "مؤسسة النور");
        form.set_value("amount", "4500");
        let payment = build(&form, "PAY-005").unwrap();
        assert_eq!(payment.reference, "-");
        assert_eq!(payment.method, "تحويل بنكي");
    }
}
