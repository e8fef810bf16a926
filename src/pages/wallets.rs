//! Wallet overview: cash, bank, and card wallets as master data with a
//! shared movement feed as the page's records.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Wallet, WalletMovement, MOVEMENT_KINDS, RIYAL_SHORT};
use crate::store::InsertPolicy;
use crate::summary::{count_where, sum_where, Stat, Tone};

pub fn spec() -> PageSpec<WalletMovement> {
    PageSpec {
        slug: "wallets",
        title: "المحافظ",
        id_prefix: "MOV-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::wallet_movements,
        haystack: |m| format!("{} {} {}", m.id, m.title, m.reference),
        filters: vec![FilterSpec {
            all_label: "كل الأنواع",
            options: || MOVEMENT_KINDS.iter().map(|s| s.to_string()).collect(),
            value: |m| m.kind.clone(),
        }],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |m| m.id.clone() },
            ColumnSpec { header: "التاريخ", cell: |m| format!("{} {}", m.date, m.time) },
            ColumnSpec { header: "البيان", cell: |m| m.title.clone() },
            ColumnSpec { header: "النوع", cell: |m| m.kind.clone() },
            ColumnSpec { header: "المبلغ", cell: |m| fmt::currency(m.amount, &m.currency) },
            ColumnSpec { header: "المرجع", cell: |m| m.reference.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

/// Riyal-denominated balance total only; a foreign-currency wallet must
/// not inflate the "ر.س" card.
fn sar_balance(wallets: &[Wallet]) -> f64 {
    sum_where(wallets, |w| w.currency == "SAR", |w| w.balance)
}

fn stats(records: &[WalletMovement]) -> Vec<Stat> {
    let wallets = fixtures::wallets();
    let balance = sar_balance(&wallets);
    let active = count_where(&wallets, |w| w.status == "نشط");
    let deposits = sum_where(records, |m| m.kind == "إيداع", |m| m.amount);
    let withdrawals = sum_where(records, |m| m.kind == "سحب", |m| m.amount);
    vec![
        Stat::new("عدد المحافظ", wallets.len().to_string(), Tone::Neutral),
        Stat::new("محافظ نشطة", active.to_string(), Tone::Positive),
        Stat::new("إجمالي الأرصدة", fmt::currency(balance, RIYAL_SHORT), Tone::Info),
        Stat::new(
            "صافي الحركات",
            fmt::currency(deposits - withdrawals, RIYAL_SHORT),
            Tone::Warning,
        ),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("title", "البيان"),
        FormField::selector("type", "النوع", MOVEMENT_KINDS),
        FormField::number("amount", "المبلغ"),
        FormField::text("reference", "المرجع"),
        FormField::date("date", "التاريخ"),
    ])
}

fn prefill(movement: &WalletMovement) -> Form {
    let mut form = blank();
    form.set_value("title", &movement.title);
    form.set_value("type", &movement.kind);
    form.set_value("amount", fmt::editable(movement.amount));
    form.set_value("reference", &movement.reference);
    form.set_value("date", &movement.date);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<WalletMovement, Vec<FieldError>> {
    let mut errors = Vec::new();
    let title = form::gather(&mut errors, form::require(form, "title", "البيان"));
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(WalletMovement {
        id: id.to_string(),
        date: form::date_or_today(form, "date"),
        time: chrono::Local::now().format("%H:%M").to_string(),
        title: title.unwrap_or_default(),
        amount: amount.unwrap_or_default(),
        currency: RIYAL_SHORT.to_string(),
        kind: form.value("type").to_string(),
        reference: form::optional(form, "reference", "-"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_movement_can_be_negative() {
        let stats = stats(&fixtures::wallet_movements());
        assert_eq!(stats[3].value, "-18,800 ر.س");
    }

    #[test]
    fn test_active_wallet_count() {
        let stats = stats(&[]);
        assert_eq!(stats[0].value, "4");
        assert_eq!(stats[1].value, "3");
    }

    #[test]
    fn test_balance_total_excludes_foreign_currency_wallets() {
        let mut wallets = fixtures::wallets();
        wallets.push(Wallet {
            id: "WLT-005".into(),
            name: "محفظة الدولار".into(),
            kind: "بنك".into(),
            currency: "USD".into(),
            balance: 9000.0,
            status: "نشط".into(),
        });
        assert_eq!(sar_balance(&wallets), 1_218_000.0);
    }
}
