//! Bank accounts. Records are the transaction ledger (six-digit serials);
//! the account list is master data feeding stats and the account selector.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{
    BankAccount, BankTransaction, COMPLETION_STATUSES, CURRENCIES, MOVEMENT_KINDS, RIYAL_SHORT,
};
use crate::store::InsertPolicy;
use crate::summary::{sum_where, Stat, Tone};

pub fn spec() -> PageSpec<BankTransaction> {
    PageSpec {
        slug: "banks",
        title: "الحسابات البنكية",
        id_prefix: "TRX-",
        id_width: 6,
        insert: InsertPolicy::Head,
        fixtures: fixtures::bank_transactions,
        haystack: |t| format!("{} {} {} {}", t.id, t.account, t.description, t.reference),
        filters: vec![
            FilterSpec {
                all_label: "كل الحسابات",
                options: account_names,
                value: |t| t.account.clone(),
            },
            FilterSpec {
                all_label: "كل الأنواع",
                options: || MOVEMENT_KINDS.iter().map(|s| s.to_string()).collect(),
                value: |t| t.kind.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |t| t.id.clone() },
            ColumnSpec { header: "التاريخ", cell: |t| format!("{} {}", t.date, t.time) },
            ColumnSpec { header: "الحساب", cell: |t| t.account.clone() },
            ColumnSpec { header: "النوع", cell: |t| t.kind.clone() },
            ColumnSpec { header: "المبلغ", cell: |t| fmt::currency(t.amount, &t.currency) },
            ColumnSpec { header: "الوصف", cell: |t| t.description.clone() },
            ColumnSpec { header: "المرجع", cell: |t| t.reference.clone() },
            ColumnSpec { header: "الحالة", cell: |t| t.status.clone() },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn account_names() -> Vec<String> {
    fixtures::bank_accounts().into_iter().map(|a| a.name).collect()
}

/// Riyal-denominated balance total; foreign-currency accounts are listed
/// but never mixed into the "ر.س" card.
fn sar_balance(accounts: &[BankAccount]) -> f64 {
    sum_where(accounts, |a| a.currency == "SAR", |a| a.balance)
}

fn stats(records: &[BankTransaction]) -> Vec<Stat> {
    let accounts = fixtures::bank_accounts();
    let balance = sar_balance(&accounts);
    let deposits = sum_where(records, |t| t.kind == "إيداع", |t| t.amount);
    let withdrawals = sum_where(records, |t| t.kind == "سحب", |t| t.amount);
    vec![
        Stat::new("عدد الحسابات", accounts.len().to_string(), Tone::Neutral),
        Stat::new("إجمالي الأرصدة", fmt::currency(balance, RIYAL_SHORT), Tone::Info),
        Stat::new("الإيداعات", fmt::currency(deposits, RIYAL_SHORT), Tone::Positive),
        Stat::new("السحوبات", fmt::currency(withdrawals, RIYAL_SHORT), Tone::Negative),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::selector_owned("account", "الحساب", account_names()),
        FormField::selector("type", "النوع", MOVEMENT_KINDS),
        FormField::number("amount", "المبلغ"),
        FormField::selector("currency", "العملة", CURRENCIES),
        FormField::text("description", "الوصف"),
        FormField::text("reference", "المرجع"),
        FormField::selector("status", "الحالة", COMPLETION_STATUSES),
        FormField::date("date", "التاريخ"),
    ])
}

fn prefill(txn: &BankTransaction) -> Form {
    let mut form = blank();
    form.set_value("account", &txn.account);
    form.set_value("type", &txn.kind);
    form.set_value("amount", fmt::editable(txn.amount));
    form.set_value("currency", &txn.currency);
    form.set_value("description", &txn.description);
    form.set_value("reference", &txn.reference);
    form.set_value("status", &txn.status);
    form.set_value("date", &txn.date);
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<BankTransaction, Vec<FieldError>> {
    let mut errors = Vec::new();
    let amount = form::gather(&mut errors, form::parse_amount(form, "amount", "المبلغ"));
    let description = form::gather(&mut errors, form::require(form, "description", "الوصف"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(BankTransaction {
        id: id.to_string(),
        date: form::date_or_today(form, "date"),
        time: chrono::Local::now().format("%H:%M").to_string(),
        account: form.value("account").to_string(),
        kind: form.value("type").to_string(),
        amount: amount.unwrap_or_default(),
        currency: form.value("currency").to_string(),
        description: description.unwrap_or_default(),
        reference: form::optional(form, "reference", "-"),
        status: form.value("status").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordCollection;

    #[test]
    fn test_transaction_serials_are_six_digits() {
        let col = RecordCollection::new(fixtures::bank_transactions(), InsertPolicy::Head);
        assert_eq!(col.next_id("TRX-", 6), "TRX-000005");
    }

    #[test]
    fn test_stats_use_account_master_data() {
        let stats = stats(&fixtures::bank_transactions());
        assert_eq!(stats[0].value, "3");
        assert_eq!(stats[1].value, "1,075,000 ر.س");
    }

    #[test]
    fn test_balance_total_excludes_foreign_currency_accounts() {
        let accounts = fixtures::bank_accounts();
        assert!(accounts.iter().any(|a| a.currency == "USD"));
        assert_eq!(sar_balance(&accounts), 1_075_000.0);
    }
}
