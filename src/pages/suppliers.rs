//! Supplier directory with purchase volume and amounts still owed.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Supplier, ACTIVE_STATUSES, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{count_where, sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Supplier> {
    PageSpec {
        slug: "suppliers",
        title: "الموردون",
        id_prefix: "SUP-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::suppliers,
        haystack: |s| format!("{} {} {} {} {}", s.id, s.name, s.email, s.phone, s.city),
        filters: vec![FilterSpec {
            all_label: "كل الحالات",
            options: || ACTIVE_STATUSES.iter().map(|s| s.to_string()).collect(),
            value: |s| s.status.clone(),
        }],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |s| s.id.clone() },
            ColumnSpec { header: "الاسم", cell: |s| s.name.clone() },
            ColumnSpec { header: "الحالة", cell: |s| s.status.clone() },
            ColumnSpec { header: "البريد", cell: |s| s.email.clone() },
            ColumnSpec { header: "الهاتف", cell: |s| s.phone.clone() },
            ColumnSpec { header: "المدينة", cell: |s| s.city.clone() },
            ColumnSpec { header: "الطلبات", cell: |s| s.orders.to_string() },
            ColumnSpec { header: "المشتريات", cell: |s| fmt::currency(s.purchases, RIYAL) },
            ColumnSpec { header: "المستحق له", cell: |s| fmt::currency(s.outstanding, RIYAL) },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Supplier]) -> Vec<Stat> {
    let active = count_where(records, |s| s.status == "نشط");
    let purchases = sum_by(records, |s| s.purchases);
    let outstanding = sum_by(records, |s| s.outstanding);
    vec![
        Stat::new("عدد الموردين", records.len().to_string(), Tone::Neutral),
        Stat::new("موردون نشطون", active.to_string(), Tone::Positive),
        Stat::new("إجمالي المشتريات", fmt::currency(purchases, RIYAL), Tone::Info),
        Stat::new("المستحق للموردين", fmt::currency(outstanding, RIYAL), Tone::Warning),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("name", "اسم المورد"),
        FormField::selector("status", "الحالة", ACTIVE_STATUSES),
        FormField::text("email", "البريد الإلكتروني"),
        FormField::text("phone", "رقم الهاتف"),
        FormField::text("city", "المدينة"),
        FormField::number("orders", "عدد الطلبات"),
        FormField::number("purchases", "إجمالي المشتريات"),
        FormField::number("outstanding", "المستحق له"),
    ])
}

fn prefill(supplier: &Supplier) -> Form {
    let mut form = blank();
    form.set_value("name", &supplier.name);
    form.set_value("status", &supplier.status);
    form.set_value("email", &supplier.email);
    form.set_value("phone", &supplier.phone);
    form.set_value("city", &supplier.city);
    form.set_value("orders", supplier.orders.to_string());
    form.set_value("purchases", fmt::editable(supplier.purchases));
    form.set_value("outstanding", fmt::editable(supplier.outstanding));
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Supplier, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = form::gather(&mut errors, form::require(form, "name", "اسم المورد"));
    let orders = form::gather(&mut errors, form::parse_count(form, "orders", "عدد الطلبات"));
    let purchases = form::gather(
        &mut errors,
        form::parse_amount_or(form, "purchases", "إجمالي المشتريات", 0.0),
    );
    let outstanding = form::gather(
        &mut errors,
        form::parse_amount_or(form, "outstanding", "المستحق له", 0.0),
    );
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Supplier {
        id: id.to_string(),
        name: name.unwrap_or_default(),
        status: form.value("status").to_string(),
        email: form::optional(form, "email", "-"),
        phone: form::optional(form, "phone", "-"),
        city: form::optional(form, "city", "-"),
        orders: orders.unwrap_or_default(),
        purchases: purchases.unwrap_or_default(),
        outstanding: outstanding.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_outstanding_total() {
        let stats = stats(&fixtures::suppliers());
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[3].value, "34,000 ريال");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let form = blank();
        let errors = build(&form, "SUP-004").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "اسم المورد");
    }
}
