//! Domain records for every dashboard page. Statuses and categories are the
//! Arabic labels the views display; they stay plain strings (with the
//! allowed values in const slices) rather than per-entity enums.

use serde::{Deserialize, Serialize};

use crate::store::Record;

pub const INVOICE_STATUSES: &[&str] =
    &["مدفوعة", "قيد الانتظار", "متأخرة", "مدفوعة جزئيا"];
pub const PAYMENT_STATUSES: &[&str] = &["مكتملة", "قيد المعالجة"];
pub const PAYMENT_METHODS: &[&str] = &["تحويل بنكي", "نقدا", "شيك", "بطاقة ائتمان"];
pub const ACTIVE_STATUSES: &[&str] = &["نشط", "غير نشط"];
pub const PRODUCT_STATUSES: &[&str] = &["متوفر", "منخفض", "نافد"];
pub const PRODUCT_CATEGORIES: &[&str] = &["الإلكترونيات", "ملحقات", "أثاث", "مستلزمات"];
pub const PURCHASE_STATUSES: &[&str] = &["مدفوع", "جزئي", "آجلة"];
pub const EXPENSE_CATEGORIES: &[&str] = &["صيانة", "رواتب", "مصاريف تشغيل", "مستلزمات"];
pub const WALLET_OPTIONS: &[&str] = &["الصندوق النقدي", "البنك الأهلي", "بنك الراجحي"];
pub const MOVEMENT_KINDS: &[&str] = &["إيداع", "سحب"];
pub const MOVEMENT_CATEGORIES: &[&str] = &["مبيعات", "مشتريات", "مصروفات"];
pub const TRANSFER_STATUSES: &[&str] = &["مكتمل", "قيد المعالجة"];
pub const COMPLETION_STATUSES: &[&str] = &["مكتمل", "قيد المعالجة"];
pub const USER_ROLES: &[&str] = &["مدير النظام", "مشرف", "محاسب", "مشاهد"];
pub const ACTIVITY_SECTIONS: &[&str] = &[
    "المستخدمين",
    "العملاء",
    "الفواتير",
    "المدفوعات",
    "المشتريات",
    "المحافظ",
];
pub const ACTIVITY_ACTIONS: &[&str] = &["إضافة", "تعديل", "حذف", "تسجيل دخول"];
pub const CURRENCIES: &[&str] = &["SAR", "USD"];

/// Riyal label used on single-currency pages.
pub const RIYAL: &str = "ريال";
/// Short riyal label used on the cash-flow style pages.
pub const RIYAL_SHORT: &str = "ر.س";

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub paid: f64,
    pub due: f64,
    pub status: String,
    pub date: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub invoice: String,
    pub client: String,
    pub amount: f64,
    pub method: String,
    pub wallet: String,
    pub status: String,
    pub date: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub invoices: u32,
    pub sales: f64,
    pub paid: f64,
    pub due: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub orders: u32,
    pub purchases: f64,
    pub outstanding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub sku: String,
    pub supplier: String,
    pub status: String,
    pub stock: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub supplier: String,
    pub warehouse: String,
    pub date: String,
    pub items_count: u32,
    pub total: f64,
    pub paid: f64,
}

impl Purchase {
    /// Payment status derives from paid vs total; it is never stored.
    pub fn status(&self) -> &'static str {
        if self.paid >= self.total {
            "مدفوع"
        } else if self.paid > 0.0 {
            "جزئي"
        } else {
            "آجلة"
        }
    }

    pub fn due(&self) -> f64 {
        (self.total - self.paid).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub wallet: String,
    pub date: String,
    pub reference: String,
}

/// Cash vault master data; the cash page's record collection is the
/// movement log, vaults feed its stats and form options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: String,
    pub name: String,
    pub location: String,
    pub balance: f64,
    pub currency: String,
    pub min_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultMovement {
    pub id: String,
    pub date: String,
    pub time: String,
    pub vault: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub bank_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: String,
    pub balance: f64,
    pub iban: String,
    pub branch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransaction {
    pub id: String,
    pub date: String,
    pub time: String,
    pub account: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub reference: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency: String,
    pub balance: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMovement {
    pub id: String,
    pub date: String,
    pub time: String,
    pub title: String,
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub date: String,
    pub time: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub fees: f64,
    /// Always amount - fees; recomputed by the builder, stored for export.
    pub net: f64,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub last_login: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub description: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub user: String,
    pub section: String,
    pub action: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementEntry {
    pub id: String,
    pub date: String,
    pub time: String,
    pub account: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub before_balance: f64,
    pub after_balance: f64,
    pub description: String,
    pub category: String,
}

/// One row of the monthly performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub month: String,
    pub sales: f64,
    pub cost: f64,
}

// Report rows key on the month name; that is their identity for the
// generic page machinery (the page is read-only, so no ids are minted).
impl Record for ReportRow {
    fn id(&self) -> &str {
        &self.month
    }
}

impl ReportRow {
    pub fn profit(&self) -> f64 {
        self.sales - self.cost
    }

    pub fn margin(&self) -> String {
        crate::summary::ratio_pct(self.profit(), self.sales)
    }
}

impl_record!(
    Invoice,
    Payment,
    Customer,
    Supplier,
    Product,
    Purchase,
    Expense,
    Vault,
    VaultMovement,
    BankAccount,
    BankTransaction,
    Wallet,
    WalletMovement,
    Transfer,
    UserAccount,
    Plan,
    ActivityEntry,
    MovementEntry,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_status_derivation() {
        let mut p = Purchase {
            id: "PUR-001".into(),
            supplier: "مورد".into(),
            warehouse: "المستودع الرئيسي".into(),
            date: "2026-01-16".into(),
            items_count: 10,
            total: 45000.0,
            paid: 45000.0,
        };
        assert_eq!(p.status(), "مدفوع");
        p.paid = 20000.0;
        assert_eq!(p.status(), "جزئي");
        assert_eq!(p.due(), 25000.0);
        p.paid = 0.0;
        assert_eq!(p.status(), "آجلة");
    }

    #[test]
    fn test_report_row_margin_guard() {
        let row = ReportRow { month: "يناير".into(), sales: 0.0, cost: 500.0 };
        assert_eq!(row.margin(), "—");
        let row = ReportRow { month: "فبراير".into(), sales: 1000.0, cost: 600.0 };
        assert_eq!(row.profit(), 400.0);
        assert_eq!(row.margin(), "40.0%");
    }

    #[test]
    fn test_movement_kind_serializes_as_type() {
        let m = VaultMovement {
            id: "MOV-001".into(),
            date: "2026-01-16".into(),
            time: "10:30".into(),
            vault: "الخزنة الرئيسية".into(),
            kind: "إيداع".into(),
            amount: 15000.0,
            currency: "SAR".into(),
            description: "تحصيل من عميل".into(),
            reference: "INV-1234".into(),
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"type\":\"إيداع\""));
    }
}
