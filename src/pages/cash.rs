//! Cash vaults. The record collection is the movement log; the vault list
//! itself is master data that feeds the stats and the vault selector.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{VaultMovement, CURRENCIES, MOVEMENT_KINDS, RIYAL_SHORT};
use crate::store::InsertPolicy;
use crate::summary::{sum_by, sum_where, Stat, Tone};

pub fn spec() -> PageSpec<VaultMovement> {
    PageSpec {
        slug: "cash",
        title: "الخزائن النقدية",
        id_prefix: "MOV-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::vault_movements,
        haystack: |m| format!("{} {} {} {}", m.id, m.vault, m.description, m.reference),
        filters: vec![
            FilterSpec {
                all_label: "كل الخزائن",
                options: vault_names,
                value: |m| m.vault.clone(),
            },
            FilterSpec {
                all_label: "كل الأنواع",
                options: || MOVEMENT_KINDS.iter().map(|s| s.to_string()).collect(),
                value: |m| m.kind.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |m| m.id.clone() },
            ColumnSpec { header: "التاريخ", cell: |m| format!("{} {}", m.date, m.time) },
            ColumnSpec { header: "الخزنة", cell: |m| m.vault.clone() },
            ColumnSpec { header: "النوع", cell: |m| m.kind.clone() },
            ColumnSpec { header: "المبلغ", cell: |m| fmt::currency(m.amount, &m.currency) },
            ColumnSpec { header: "الوصف", cell: |m| m.description.clone() },
            ColumnSpec { header: "المرجع", cell: |m| m.reference.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn vault_names() -> Vec<String> {
    fixtures::vaults().into_iter().map(|v| v.name).collect()
}

fn stats(records: &[VaultMovement]) -> Vec<Stat> {
    let vaults = fixtures::vaults();
    let balance = sum_by(&vaults, |v| v.balance);
    let deposits = sum_where(records, |m| m.kind == "إيداع", |m| m.amount);
    let withdrawals = sum_where(records, |m| m.kind == "سحب", |m| m.amount);
    vec![
        Stat::new("عدد الخزائن", vaults.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي الأرصدة", fmt::currency(balance, RIYAL_SHORT), Tone::Info),
        Stat::new("الإيداعات", fmt::currency(deposits, RIYAL_SHORT), Tone::Positive),
        Stat::new("السحوبات", fmt::currency(withdrawals, RIYAL_SHORT), Tone::Negative),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::selector_owned("vault", "الخزنة", vault_names()),
        FormField::selector("type", "النوع", MOVEMENT_KINDS),
        FormField::number("amount", "المبلغ"),
        FormField::selector("currency", "العملة", CURRENCIES),
        FormField::text("description", "الوصف"),
        FormField::text("reference", "المرجع"),
        FormField::date("date", "التاريخ"),
    ])
}

fn prefill(movement: &VaultMovement) -> Form {
    let mut form = blank();
    form.set_value("vault", &movement.vault);
    form.set_value("type", &movement.kind);
    form.set_value("amount", fmt::editable(movement.amount));
    form.set_value("currency", &movement.currency);
    form.set_value("description", &movement.description);
    form.set_value("reference", &movement.reference);
    form.set_value("date", &movement.date);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<VaultMovement, Vec<FieldError>> {
    let mut errors = Vec::new();
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    let description = form::gather(&mut errors, form::require(form, "description", "الوصف"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(VaultMovement {
        id: id.to_string(),
        date: form::date_or_today(form, "date"),
        time: chrono::Local::now().format("%H:%M").to_string(),
        vault: form.value("vault").to_string(),
        kind: form.value("type").to_string(),
        amount: amount.unwrap_or_default(),
        currency: form.value("currency").to_string(),
        description: description.unwrap_or_default(),
        reference: form::optional(form, "reference", "-"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_split_deposits_and_withdrawals() {
        let stats = stats(&fixtures::vault_movements());
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[2].value, "23,500 ر.س");
        assert_eq!(stats[3].value, "4,200 ر.س");
    }

    #[test]
    fn test_vault_selector_lists_master_data() {
        let form = blank();
        assert_eq!(form.value("vault"), "الخزنة الرئيسية");
    }
}
