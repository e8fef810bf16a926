//! Operating expenses, filterable by category and paying wallet.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Expense, EXPENSE_CATEGORIES, RIYAL, WALLET_OPTIONS};
use crate::store::InsertPolicy;
use crate::summary::{sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Expense> {
    PageSpec {
        slug: "expenses",
        title: "المصروفات",
        id_prefix: "EXP-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::expenses,
        haystack: |e| format!("{} {} {}", e.id, e.description, e.reference),
        filters: vec![
            FilterSpec {
                all_label: "كل الفئات",
                options: || EXPENSE_CATEGORIES.iter().map(|s| s.to_string()).collect(),
                value: |e| e.category.clone(),
            },
            FilterSpec {
                all_label: "كل المحافظ",
                options: || WALLET_OPTIONS.iter().map(|s| s.to_string()).collect(),
                value: |e| e.wallet.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |e| e.id.clone() },
            ColumnSpec { header: "الوصف", cell: |e| e.description.clone() },
            ColumnSpec { header: "الفئة", cell: |e| e.category.clone() },
            ColumnSpec { header: "المبلغ", cell: |e| fmt::currency(e.amount, RIYAL) },
            ColumnSpec { header: "المحفظة", cell: |e| e.wallet.clone() },
            ColumnSpec { header: "التاريخ", cell: |e| e.date.clone() },
            ColumnSpec { header: "المرجع", cell: |e| e.reference.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Expense]) -> Vec<Stat> {
    let total = sum_by(records, |e| e.amount);
    let average = if records.is_empty() { 0.0 } else { total / records.len() as f64 };
    vec![
        Stat::new("عدد المصروفات", records.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي المصروفات", fmt::currency(total, RIYAL), Tone::Negative),
        Stat::new("متوسط المصروف", fmt::currency(average, RIYAL), Tone::Info),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("description", "الوصف"),
        FormField::selector("category", "الفئة", EXPENSE_CATEGORIES),
        FormField::number("amount", "المبلغ"),
        FormField::selector("wallet", "المحفظة", WALLET_OPTIONS),
        FormField::date("date", "التاريخ"),
        FormField::text("reference", "المرجع"),
    ])
}

fn prefill(expense: &Expense) -> Form {
    let mut form = blank();
    form.set_value("description", &expense.description);
    form.set_value("category", &expense.category);
    form.set_value("amount", fmt::editable(expense.amount));
    form.set_value("wallet", &expense.wallet);
    form.set_value("date", &expense.date);
    form.set_value("reference", &expense.reference);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Expense, Vec<FieldError>> {
    let mut errors = Vec::new();
    let description = form::gather(&mut errors, form::require(form, "description", "الوصف"));
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Expense {
        id: id.to_string(),
        description: description.unwrap_or_default(),
        category: form.value("category").to_string(),
        amount: amount.unwrap_or_default(),
        wallet: form.value("wallet").to_string(),
        date: form::date_or_today(form, "date"),
        reference: form::optional(form, "reference", "-"),
    })
}
