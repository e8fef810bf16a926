pub mod browse;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod report;
pub mod reset;
pub mod status;
pub mod summary;

use clap::{Parser, Subcommand};

use crate::error::{DaftarError, Result};
use crate::filter::Selection;
use crate::pages::Page;

#[derive(Parser)]
#[command(
    name = "daftar",
    about = "Arabic-first business administration dashboard for the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up daftar: choose a data directory and write initial settings.
    Init {
        /// Path for daftar data (default: ~/Documents/daftar)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Interactively browse a page (default: the last page viewed).
    Browse {
        /// Page slug, e.g. invoices, payments, cash
        page: Option<String>,
    },
    /// Print a page's records as a table.
    List {
        /// Page slug
        page: String,
        /// Free-text search over the page's searchable fields
        #[arg(long)]
        query: Option<String>,
        /// Filter value, e.g. a status or category; repeatable
        #[arg(long)]
        filter: Vec<String>,
    },
    /// Print a page's summary cards.
    Summary {
        /// Page slug
        page: String,
    },
    /// Export a page's records to CSV.
    Export {
        /// Page slug
        page: String,
        /// Output path (default: <data_dir>/exports/<page>-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        filter: Vec<String>,
    },
    /// Monthly performance report: sales, costs, profit, margin.
    Report,
    /// Restore a page (or all pages) to its seed records.
    Reset {
        /// Page slug; omit to reset every page
        page: Option<String>,
    },
    /// Show or update settings.
    Config {
        /// Display name used in the activity log
        #[arg(long = "user-name")]
        user_name: Option<String>,
        /// Move the data directory path in settings
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show the data directory and per-page record counts.
    Status,
}

/// Map `--filter` values onto the page's filters: each value selects the
/// first filter whose options contain it. "الكل"-style sentinels are
/// accepted and mean no restriction. Unknown values are an error, not
/// silently ignored.
pub(crate) fn build_selections(page: &dyn Page, values: &[String]) -> Result<Vec<Selection>> {
    let filters = page.filters();
    let mut selections = vec![Selection::Any; filters.len()];
    for value in values {
        if Selection::from_label(value) == Selection::Any {
            continue;
        }
        let slot = filters
            .iter()
            .position(|f| f.options.iter().any(|o| o == value));
        match slot {
            Some(idx) => selections[idx] = Selection::Only(value.clone()),
            None => {
                return Err(DaftarError::Other(format!(
                    "قيمة فلتر غير معروفة للصفحة {}: {value}",
                    page.slug()
                )))
            }
        }
    }
    Ok(selections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{invoices, payments, PageStore};

    #[test]
    fn test_filter_value_lands_on_matching_filter() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageStore::open_at(payments::spec(), dir.path().join("payments.json"));
        let selections =
            build_selections(&page, &["مكتملة".to_string(), "شيك".to_string()]).unwrap();
        assert_eq!(selections[0], Selection::Only("مكتملة".into()));
        assert_eq!(selections[1], Selection::Only("شيك".into()));
    }

    #[test]
    fn test_sentinel_filter_value_means_no_restriction() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageStore::open_at(invoices::spec(), dir.path().join("invoices.json"));
        let selections = build_selections(&page, &["كل الحالات".to_string()]).unwrap();
        assert_eq!(selections[0], Selection::Any);
    }

    #[test]
    fn test_unknown_filter_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageStore::open_at(invoices::spec(), dir.path().join("invoices.json"));
        assert!(build_selections(&page, &["لا شيء".to_string()]).is_err());
    }
}
