//! CSV export of a page's visible rows, written the way the dashboard
//! downloads them: UTF-8 with a BOM so spreadsheet apps detect the Arabic
//! headers, one line per record in display order.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filter::Selection;
use crate::pages::Page;
use crate::settings::get_data_dir;

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Default target: `<data_dir>/exports/<slug>-YYYY-MM-DD.csv`.
pub fn default_export_path(slug: &str) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y-%m-%d");
    get_data_dir()
        .join("exports")
        .join(format!("{slug}-{stamp}.csv"))
}

/// Write the filtered view to `path`. Returns the number of data rows.
pub fn export_csv(
    page: &dyn Page,
    query: &str,
    selections: &[Selection],
    path: &Path,
) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let rows = page.visible(query, selections);
    let mut buf = Vec::new();
    buf.extend_from_slice(BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(page.headers())?;
        for row in &rows {
            writer.write_record(&row.cells)?;
        }
        writer.flush()?;
    }
    std::fs::write(path, buf)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::{invoices, PageStore};

    #[test]
    fn test_export_starts_with_bom_and_headers() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageStore::open_at(invoices::spec(), dir.path().join("invoices.json"));
        let path = dir.path().join("exports").join("invoices.csv");
        let count = export_csv(&page, "", &[], &path).unwrap();
        assert_eq!(count, 5);
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], BOM);
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.contains("العميل"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_export_respects_filters() {
        let dir = tempfile::tempdir().unwrap();
        let page = PageStore::open_at(invoices::spec(), dir.path().join("invoices.json"));
        let path = dir.path().join("paid.csv");
        let count = export_csv(
            &page,
            "",
            &[Selection::Only("مدفوعة".into())],
            &path,
        )
        .unwrap();
        assert_eq!(count, 2);
    }
}
