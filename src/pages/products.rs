//! Product catalog: stock levels, availability status, and inventory value.

use super::{ColumnSpec, FilterSpec, FormSpec, PageSpec};
use crate::error::FieldError;
use crate::fixtures;
use crate::fmt;
use crate::form::{self, Form, FormField};
use crate::models::{Product, PRODUCT_CATEGORIES, PRODUCT_STATUSES, RIYAL};
use crate::store::InsertPolicy;
use crate::summary::{count_where, sum_by, Stat, Tone};

pub fn spec() -> PageSpec<Product> {
    PageSpec {
        slug: "products",
        title: "المنتجات",
        id_prefix: "PROD-",
        id_width: 3,
        insert: InsertPolicy::Head,
        fixtures: fixtures::products,
        haystack: |p| format!("{} {} {} {}", p.id, p.name, p.sku, p.supplier),
        filters: vec![
            FilterSpec {
                all_label: "كل الفئات",
                options: || PRODUCT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
                value: |p| p.category.clone(),
            },
            FilterSpec {
                all_label: "كل الحالات",
                options: || PRODUCT_STATUSES.iter().map(|s| s.to_string()).collect(),
                value: |p| p.status.clone(),
            },
        ],
        stats,
        columns: vec![
            ColumnSpec { header: "الرقم", cell: |p| p.id.clone() },
            ColumnSpec { header: "المنتج", cell: |p| p.name.clone() },
            ColumnSpec { header: "الفئة", cell: |p| p.category.clone() },
            ColumnSpec { header: "SKU", cell: |p| p.sku.clone() },
            ColumnSpec { header: "المورد", cell: |p| p.supplier.clone() },
            ColumnSpec { header: "الحالة", cell: |p| p.status.clone() },
            ColumnSpec { header: "المخزون", cell: |p| p.stock.to_string() },
            ColumnSpec { header: "السعر", cell: |p| fmt::currency(p.price, RIYAL) },
        ],
        form: Some(FormSpec { blank, prefill, build }),
    }
}

fn stats(records: &[Product]) -> Vec<Stat> {
    let available = count_where(records, |p| p.status == "متوفر");
    let out = count_where(records, |p| p.status == "نافد");
    let value = sum_by(records, |p| p.price * p.stock as f64);
    vec![
        Stat::new("عدد المنتجات", records.len().to_string(), Tone::Neutral),
        Stat::new("متوفرة", available.to_string(), Tone::Positive),
        Stat::new("نافدة", out.to_string(), Tone::Negative),
        Stat::new("قيمة المخزون", fmt::currency(value, RIYAL), Tone::Info),
    ]
}

fn blank() -> Form {
    Form::new(vec![
        FormField::text("name", "اسم المنتج"),
        FormField::selector("category", "الفئة", PRODUCT_CATEGORIES),
        FormField::text("sku", "SKU"),
        FormField::text("supplier", "المورد"),
        FormField::selector("status", "الحالة", PRODUCT_STATUSES),
        FormField::number("stock", "المخزون"),
        FormField::number("price", "السعر"),
    ])
}

fn prefill(product: &Product) -> Form {
    let mut form = blank();
    form.set_value("name", &product.name);
    form.set_value("category", &product.category);
    form.set_value("sku", &product.sku);
    form.set_value("supplier", &product.supplier);
    form.set_value("status", &product.status);
    form.set_value("stock", product.stock.to_string());
    form.set_value("price", fmt::editable(product.price));
    form
}

fn build(form: &Form, id: &str) -> std::result::Result<Product, Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = form::gather(&mut errors, form::require(form, "name", "اسم المنتج"));
    let stock = form::gather(&mut errors, form::parse_count(form, "stock", "المخزون"));
    let price = form::gather(&mut errors, form::parse_amount(form, "price", "السعر"));
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(Product {
        id: id.to_string(),
        name: name.unwrap_or_default(),
        category: form.value("category").to_string(),
        sku: form::optional(form, "sku", "-"),
        supplier: form::optional(form, "supplier", "-"),
        status: form.value("status").to_string(),
        stock: stock.unwrap_or_default(),
        price: price.unwrap_or_default(),
    })
}
