//! Page registry: every dashboard page is a `PageSpec<T>` — one declarative
//! description of its records, filters, stats, table columns, and form —
//! driven by the same store, filter, and persistence machinery. The CLI and
//! the interactive browser only ever see the type-erased [`Page`] trait.

pub mod activity;
pub mod banks;
pub mod cash;
pub mod customers;
pub mod expenses;
pub mod invoices;
pub mod movements;
pub mod payments;
pub mod plans;
pub mod products;
pub mod purchases;
pub mod reports;
pub mod suppliers;
pub mod transfers;
pub mod users;
pub mod wallets;

use std::path::PathBuf;

use crate::error::{DaftarError, FieldError, Result};
use crate::filter::{self, query_matches, Selection};
use crate::form::Form;
use crate::persist;
use crate::store::{InsertPolicy, Record, RecordCollection};
use crate::summary::Stat;

/// One table column: header plus a cell renderer.
pub struct ColumnSpec<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

/// One categorical filter: the "all" label shown when nothing is selected,
/// the concrete options, and the field accessor the selection tests against.
pub struct FilterSpec<T> {
    pub all_label: &'static str,
    pub options: fn() -> Vec<String>,
    pub value: fn(&T) -> String,
}

/// Create/edit form wiring for a page. `build` turns a submitted draft into
/// a record carrying the given id, or the full list of field errors.
pub struct FormSpec<T> {
    pub blank: fn() -> Form,
    pub prefill: fn(&T) -> Form,
    pub build: fn(&Form, &str) -> std::result::Result<T, Vec<FieldError>>,
}

pub struct PageSpec<T: Record> {
    pub slug: &'static str,
    pub title: &'static str,
    pub id_prefix: &'static str,
    pub id_width: usize,
    pub insert: InsertPolicy,
    pub fixtures: fn() -> Vec<T>,
    /// Searchable text for the free-text query, built from the page's fields.
    pub haystack: fn(&T) -> String,
    pub filters: Vec<FilterSpec<T>>,
    pub stats: fn(&[T]) -> Vec<Stat>,
    pub columns: Vec<ColumnSpec<T>>,
    /// None for read-only pages (plans, logs, reports).
    pub form: Option<FormSpec<T>>,
}

/// A page's records loaded from disk (or fixtures), ready to filter,
/// aggregate, and mutate. Every successful mutation writes straight back.
pub struct PageStore<T: Record> {
    spec: PageSpec<T>,
    collection: RecordCollection<T>,
    path: PathBuf,
}

impl<T: Record> PageStore<T> {
    pub fn open(spec: PageSpec<T>) -> Self {
        let path = persist::page_path(spec.slug);
        Self::open_at(spec, path)
    }

    pub fn open_at(spec: PageSpec<T>, path: PathBuf) -> Self {
        let records = persist::load_or_else(&path, spec.fixtures);
        let collection = RecordCollection::new(records, spec.insert);
        Self { spec, collection, path }
    }

    pub fn records(&self) -> &[T] {
        self.collection.all()
    }
}

/// Filter metadata handed to the views: display label plus concrete options.
#[derive(Debug, Clone)]
pub struct FilterMeta {
    pub all_label: &'static str,
    pub options: Vec<String>,
}

/// One rendered table row: the record's id plus its formatted cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: String,
    pub cells: Vec<String>,
}

/// Type-erased page interface. The browser and the CLI subcommands operate
/// on `Box<dyn Page>` so one code path serves all sixteen pages.
pub trait Page {
    fn slug(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn len(&self) -> usize;
    fn headers(&self) -> Vec<&'static str>;
    fn filters(&self) -> Vec<FilterMeta>;
    fn stats(&self) -> Vec<Stat>;
    /// Rows surviving the query and the per-filter selections, in store
    /// order. `selections` pairs positionally with `filters()`.
    fn visible(&self, query: &str, selections: &[Selection]) -> Vec<RowView>;
    fn can_edit(&self) -> bool;
    fn blank_form(&self) -> Option<Form>;
    fn edit_form(&self, id: &str) -> Option<Form>;
    /// Validate and insert a new record, persisting on success. Returns the
    /// minted id. Validation failures leave the store untouched.
    fn submit_create(&mut self, form: &Form) -> Result<String>;
    fn submit_edit(&mut self, id: &str, form: &Form) -> Result<()>;
    /// Drop the on-disk file and reload the seed records.
    fn reset(&mut self) -> Result<()>;
}

impl<T: Record> Page for PageStore<T> {
    fn slug(&self) -> &'static str {
        self.spec.slug
    }

    fn title(&self) -> &'static str {
        self.spec.title
    }

    fn len(&self) -> usize {
        self.collection.len()
    }

    fn headers(&self) -> Vec<&'static str> {
        self.spec.columns.iter().map(|c| c.header).collect()
    }

    fn filters(&self) -> Vec<FilterMeta> {
        self.spec
            .filters
            .iter()
            .map(|f| FilterMeta {
                all_label: f.all_label,
                options: (f.options)(),
            })
            .collect()
    }

    fn stats(&self) -> Vec<Stat> {
        (self.spec.stats)(self.collection.all())
    }

    fn visible(&self, query: &str, selections: &[Selection]) -> Vec<RowView> {
        let spec = &self.spec;
        let matching = filter::apply(self.collection.all(), |record| {
            let by_query = query_matches(query, &(spec.haystack)(record));
            let by_filters = spec.filters.iter().enumerate().all(|(i, f)| {
                selections
                    .get(i)
                    .unwrap_or(&Selection::Any)
                    .matches(&(f.value)(record))
            });
            by_query && by_filters
        });
        matching
            .into_iter()
            .map(|record| RowView {
                id: record.id().to_string(),
                cells: spec.columns.iter().map(|c| (c.cell)(record)).collect(),
            })
            .collect()
    }

    fn can_edit(&self) -> bool {
        self.spec.form.is_some()
    }

    fn blank_form(&self) -> Option<Form> {
        self.spec.form.as_ref().map(|f| (f.blank)())
    }

    fn edit_form(&self, id: &str) -> Option<Form> {
        let form = self.spec.form.as_ref()?;
        let record = self.collection.get(id)?;
        Some((form.prefill)(record))
    }

    fn submit_create(&mut self, form: &Form) -> Result<String> {
        let form_spec = self
            .spec
            .form
            .as_ref()
            .ok_or_else(|| DaftarError::Other(format!("{} is read-only", self.spec.slug)))?;
        let id = self.collection.next_id(self.spec.id_prefix, self.spec.id_width);
        let record = (form_spec.build)(form, &id).map_err(DaftarError::Validation)?;
        self.collection.add(record)?;
        persist::save(&self.path, self.collection.all())?;
        Ok(id)
    }

    fn submit_edit(&mut self, id: &str, form: &Form) -> Result<()> {
        let form_spec = self
            .spec
            .form
            .as_ref()
            .ok_or_else(|| DaftarError::Other(format!("{} is read-only", self.spec.slug)))?;
        let record = (form_spec.build)(form, id).map_err(DaftarError::Validation)?;
        if !self.collection.update(record) {
            return Err(DaftarError::Other(format!("no record with id {id}")));
        }
        persist::save(&self.path, self.collection.all())?;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        let records = (self.spec.fixtures)();
        self.collection = RecordCollection::new(records, self.spec.insert);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageId {
    Invoices,
    Payments,
    Customers,
    Suppliers,
    Products,
    Purchases,
    Expenses,
    Cash,
    Banks,
    Wallets,
    Transfers,
    Users,
    Plans,
    Activity,
    Movements,
    Reports,
}

impl PageId {
    pub const ALL: &'static [PageId] = &[
        PageId::Invoices,
        PageId::Payments,
        PageId::Customers,
        PageId::Suppliers,
        PageId::Products,
        PageId::Purchases,
        PageId::Expenses,
        PageId::Cash,
        PageId::Banks,
        PageId::Wallets,
        PageId::Transfers,
        PageId::Users,
        PageId::Plans,
        PageId::Activity,
        PageId::Movements,
        PageId::Reports,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Invoices => "invoices",
            PageId::Payments => "payments",
            PageId::Customers => "customers",
            PageId::Suppliers => "suppliers",
            PageId::Products => "products",
            PageId::Purchases => "purchases",
            PageId::Expenses => "expenses",
            PageId::Cash => "cash",
            PageId::Banks => "banks",
            PageId::Wallets => "wallets",
            PageId::Transfers => "transfers",
            PageId::Users => "users",
            PageId::Plans => "plans",
            PageId::Activity => "activity",
            PageId::Movements => "movements",
            PageId::Reports => "reports",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.slug() == slug)
            .ok_or_else(|| DaftarError::UnknownPage(slug.to_string()))
    }

    /// Load the page's records from the data directory.
    pub fn open(self) -> Box<dyn Page> {
        match self {
            PageId::Invoices => Box::new(PageStore::open(invoices::spec())),
            PageId::Payments => Box::new(PageStore::open(payments::spec())),
            PageId::Customers => Box::new(PageStore::open(customers::spec())),
            PageId::Suppliers => Box::new(PageStore::open(suppliers::spec())),
            PageId::Products => Box::new(PageStore::open(products::spec())),
            PageId::Purchases => Box::new(PageStore::open(purchases::spec())),
            PageId::Expenses => Box::new(PageStore::open(expenses::spec())),
            PageId::Cash => Box::new(PageStore::open(cash::spec())),
            PageId::Banks => Box::new(PageStore::open(banks::spec())),
            PageId::Wallets => Box::new(PageStore::open(wallets::spec())),
            PageId::Transfers => Box::new(PageStore::open(transfers::spec())),
            PageId::Users => Box::new(PageStore::open(users::spec())),
            PageId::Plans => Box::new(PageStore::open(plans::spec())),
            PageId::Activity => Box::new(PageStore::open(activity::spec())),
            PageId::Movements => Box::new(PageStore::open(movements::spec())),
            PageId::Reports => Box::new(PageStore::open(reports::spec())),
        }
    }

    pub fn next(self) -> PageId {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> PageId {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn store_in(dir: &std::path::Path) -> PageStore<crate::models::Invoice> {
        PageStore::open_at(invoices::spec(), dir.join("invoices.json"))
    }

    #[test]
    fn test_open_falls_back_to_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.len(), crate::fixtures::invoices().len());
    }

    #[test]
    fn test_every_slug_round_trips() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_slug(page.slug()).unwrap(), *page);
        }
        assert!(PageId::from_slug("nonsense").is_err());
    }

    #[test]
    fn test_page_cycling_wraps() {
        assert_eq!(PageId::Invoices.next(), PageId::Payments);
        assert_eq!(PageId::Invoices.prev(), PageId::Reports);
        assert_eq!(PageId::Reports.next(), PageId::Invoices);
    }

    #[test]
    fn test_visible_rows_match_headers_width() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let headers = store.headers();
        for row in store.visible("", &[]) {
            assert_eq!(row.cells.len(), headers.len());
        }
    }

    #[test]
    fn test_status_selection_narrows_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let all = store.visible("", &[Selection::Any]).len();
        let paid = store
            .visible("", &[Selection::Only("مدفوعة".into())])
            .len();
        assert!(paid < all);
        assert_eq!(paid, 2);
    }

    #[test]
    fn test_submit_create_persists_and_mints_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let mut form = store.blank_form().unwrap();
        form.set_value("client", "عميل جديد");
        form.set_value("amount", "1200");
        let id = store.submit_create(&form).unwrap();
        assert_eq!(id, "INV-006");
        assert!(dir.path().join("invoices.json").exists());

        // A reopened store sees the new record at the head.
        let reopened = store_in(dir.path());
        assert_eq!(reopened.records()[0].id, "INV-006");
    }

    #[test]
    fn test_invalid_submit_leaves_store_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let before = store.len();
        let mut form = store.blank_form().unwrap();
        form.set_value("client", "عميل");
        form.set_value("amount", "abc");
        let err = store.submit_create(&form).unwrap_err();
        assert!(matches!(err, DaftarError::Validation(_)));
        assert_eq!(store.len(), before);
        assert!(!dir.path().join("invoices.json").exists());
    }

    #[test]
    fn test_submit_edit_keeps_id_and_position() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let mut form = store.edit_form("INV-002").unwrap();
        form.set_value("amount", "9000");
        store.submit_edit("INV-002", &form).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids[1], "INV-002");
        assert_eq!(store.records()[1].amount, 9000.0);
    }

    #[test]
    fn test_reset_restores_fixtures_and_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let mut form = store.blank_form().unwrap();
        form.set_value("client", "عميل مؤقت");
        form.set_value("amount", "10");
        store.submit_create(&form).unwrap();
        store.reset().unwrap();
        assert_eq!(store.len(), crate::fixtures::invoices().len());
        assert!(!dir.path().join("invoices.json").exists());
    }

    #[test]
    fn test_read_only_page_rejects_submission() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PageStore::open_at(plans::spec(), dir.path().join("plans.json"));
        assert!(!store.can_edit());
        assert!(store.blank_form().is_none());
        let form = Form::new(vec![]);
        assert!(store.submit_create(&form).is_err());
    }

    #[test]
    fn test_form_typing_flows_into_built_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let mut form = store.blank_form().unwrap();
        for c in "شركة".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        form.handle_key(KeyCode::Tab);
        for c in "500".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        let id = store.submit_create(&form).unwrap();
        let row = store.records().iter().find(|r| r.id == id).unwrap();
        assert_eq!(row.client, "شركة");
        assert_eq!(row.amount, 500.0);
    }
}
