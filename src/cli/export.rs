use std::path::PathBuf;

use super::build_selections;
use crate::error::Result;
use crate::export::{default_export_path, export_csv};
use crate::pages::PageId;

pub fn run(
    page: &str,
    output: Option<String>,
    query: Option<&str>,
    filters: &[String],
) -> Result<()> {
    let page = PageId::from_slug(page)?.open();
    let selections = build_selections(page.as_ref(), filters)?;
    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_export_path(page.slug()));
    let count = export_csv(page.as_ref(), query.unwrap_or(""), &selections, &path)?;
    println!("تم تصدير {count} سجل إلى {}", path.display());
    Ok(())
}
