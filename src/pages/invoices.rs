//! Sales invoices: searchable by number/client, filterable by status, with
//! collected/outstanding totals. The remaining balance is always derived
//! from amount minus paid, never typed.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Invoice, INVOICE_STATUSES, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Invoice> {
    PageSpec {
        slug: "invoices",
        title: "الفواتير",
        id_prefix: "INV-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::invoices,
        haystack: |i| format!("{} {} {}", i.id, i.client, i.status),
        filters: vec![FilterSpec {
            all_label: "كل الحالات",
            options: || INVOICE_STATUSES.iter().map(|s| s.to_string()).collect(),
            value: |i| i.status.clone(),
        }],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |i| i.id.clone() },
            ColumnSpec { header: "العميل", cell: |i| i.client.clone() },
            ColumnSpec { header: "المبلغ", cell: |i| fmt::currency(i.amount, RIYAL) },
            ColumnSpec { header: "المدفوع", cell: |i| fmt::currency(i.paid, RIYAL) },
            ColumnSpec { header: "المتبقي", cell: |i| fmt::currency(i.due, RIYAL) },
            ColumnSpec { header: "الحالة", cell: |i| i.status.clone() },
            ColumnSpec { header: "التاريخ", cell: |i| i.date.clone() },
            ColumnSpec { header: "الاستحقاق", cell: |i| i.due_date.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Invoice]) -> Vec<Stat> {
    let total = sum_by(records, |i| i.amount);
    let paid = sum_by(records, |i| i.paid);
    let due = sum_by(records, |i| i.due);
    vec![
        Stat::new("عدد الفواتير", records.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي الفواتير", fmt::currency(total, RIYAL), Tone::Info),
        Stat::new("المحصل", fmt::currency(paid, RIYAL), Tone::Positive),
        Stat::new("المستحق", fmt::currency(due, RIYAL), Tone::Warning),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("client", "اسم العميل"),
        FormField::number("amount", "المبلغ"),
        FormField::number("paid", "المدفوع"),
        FormField::selector("status", "الحالة", INVOICE_STATUSES),
        FormField::date("date", "تاريخ الإصدار"),
        FormField::date("dueDate", "تاريخ الاستحقاق"),
    ])
}

fn prefill(invoice: &Invoice) -> Form {
    let mut form = blank();
    form.set_value("client", &invoice.client);
    form.set_value("amount", fmt::editable(invoice.amount));
    form.set_value("paid", fmt::editable(invoice.paid));
    form.set_value("status", &invoice.status);
    form.set_value("date", &invoice.date);
    form.set_value("dueDate", &invoice.due_date);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Invoice, Vec<FieldError>> {
    let mut errors = Vec::new();
    let client = form::gather(&mut errors, form::require(form, "client", "اسم العميل"));
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    let paid = form::gather(
        &mut errors,
        form::parse_amount_or(form, "paid", "المدفوع", 0.0),
    );
    if !errors.is_empty() {
        return Err(errors);
    }
    let amount = amount.unwrap_or_default();
    let paid = paid.unwrap_or_default().min(amount);
    Ok(Invoice {
        id: id.to_string(),
        client: client.unwrap_or_default(),
        amount,
        paid,
        due: amount - paid,
        status: form.value("status").to_string(),
        date: form::date_or_today(form, "date"),
        due_date: form::date_or_today(form, "dueDate"),
    })
}
