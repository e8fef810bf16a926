//! Customer directory with lifetime sales totals and outstanding balances.
//! The outstanding balance derives from sales minus paid.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Customer, ACTIVE_STATUSES, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{count_where, sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Customer> {
    PageSpec {
        slug: "customers",
        title: "العملاء",
        id_prefix: "CUS-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::customers,
        haystack: |c| format!("{} {} {} {} {}", c.id, c.name, c.email, c.phone, c.city),
        filters: vec![FilterSpec {
            all_label: "كل الحالات",
            options: || ACTIVE_STATUSES.iter().map(|s| s.to_string()).collect(),
            value: |c| c.status.clone(),
        }],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |c| c.id.clone() },
            ColumnSpec { header: "الاسم", cell: |c| c.name.clone() },
            ColumnSpec { header: "الحالة", cell: |c| c.status.clone() },
            ColumnSpec { header: "البريد", cell: |c| c.email.clone() },
            ColumnSpec { header: "الجوال", cell: |c| c.phone.clone() },
            ColumnSpec { header: "المدينة", cell: |c| c.city.clone() },
            ColumnSpec { header: "الفواتير", cell: |c| c.invoices.to_string() },
            ColumnSpec { header: "المبيعات", cell: |c| fmt::currency(c.sales, RIYAL) },
            ColumnSpec { header: "المستحق", cell: |c| fmt::currency(c.due, RIYAL) },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Customer]) -> Vec<Stat> {
    let active = count_where(records, |c| c.status == "نشط");
    let sales = sum_by(records, |c| c.sales);
    let due = sum_by(records, |c| c.due);
    vec![
        Stat::new("عدد العملاء", records.len().to_string(), Tone::Neutral),
        Stat::new("عملاء نشطون", active.to_string(), Tone::Positive),
        Stat::new("إجمالي المبيعات", fmt::currency(sales, RIYAL), Tone::Info),
        Stat::new("إجمالي المستحق", fmt::currency(due, RIYAL), Tone::Warning),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("name", "اسم العميل"),
        FormField::selector("status", "الحالة", ACTIVE_STATUSES),
        FormField::text("email", "البريد الإلكتروني"),
        FormField::text("phone", "رقم الجوال"),
        FormField::text("city", "المدينة"),
        FormField::number("invoices", "عدد الفواتير"),
        FormField::number("sales", "إجمالي المبيعات"),
        FormField::number("paid", "إجمالي المحصل"),
    ])
}

fn prefill(customer: &Customer) -> Form {
    let mut form = blank();
    form.set_value("name", &customer.name);
    form.set_value("status", &customer.status);
    form.set_value("email", &customer.email);
    form.set_value("phone", &customer.phone);
    form.set_value("city", &customer.city);
    form.set_value("invoices", customer.invoices.to_string());
    form.set_value("sales", fmt::editable(customer.sales));
    form.set_value("paid", fmt::editable(customer.paid));
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Customer, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = form::gather(&mut errors, form::require(form, "name", "اسم العميل"));
    let invoices = form::gather(
        &mut errors,
        form::parse_count(form, "invoices", "عدد الفواتير"),
    );
    let sales = form::gather(
        &mut errors,
        form::parse_amount_or(form, "sales", "إجمالي المبيعات", 0.0),
    );
    let paid = form::gather(
        &mut errors,
        form::parse_amount_or(form, "paid", "إجمالي المحصل", 0.0),
    );
    if !errors.is_empty() {
        return Err(errors);
    }
    let sales = sales.unwrap_or_default();
    let paid = paid.unwrap_or_default().min(sales);
    Ok(Customer {
        id: id.to_string(),
        name: name.unwrap_or_default(),
        status: form.value("status").to_string(),
        email: form::optional(form, "email", "-"),
        phone: form::optional(form, "phone", "-"),
        city: form::optional(form, "city", "-"),
        invoices: invoices.unwrap_or_default(),
        sales,
        paid,
        due: sales - paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_starts_with_zero_totals() {
        let mut form = blank();
        form.set_value("name", "عميل جديد");
        let customer = build(&form, "CUS-005").unwrap();
        assert_eq!(customer.invoices, 0);
        assert_eq!(customer.sales, 0.0);
        assert_eq!(customer.status, "نشط");
    }

    #[test]
    fn test_edit_preserves_totals_via_prefill() {
        let existing = &fixtures::customers()[0];
        let form = prefill(existing);
        let rebuilt = build(&form, &existing.id).unwrap();
        assert_eq!(rebuilt.sales, existing.sales);
        assert_eq!(rebuilt.due, existing.due);
    }

    #[test]
    fn test_stats_count_active() {
        let stats = stats(&fixtures::customers());
        assert_eq!(stats[0].value, "4");
        assert_eq!(stats[1].value, "3");
    }
}
