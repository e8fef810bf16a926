use comfy_table::Table;

use super::build_selections;
use crate::error::Result;
use crate::pages::PageId;

pub fn run(page: &str, query: Option<&str>, filters: &[String]) -> Result<()> {
    let page = PageId::from_slug(page)?.open();
    let selections = build_selections(page.as_ref(), filters)?;
    let rows = page.visible(query.unwrap_or(""), &selections);

    let mut table = Table::new();
    table.set_header(page.headers());
    for row in &rows {
        table.add_row(row.cells.clone());
    }
    println!("{}\n{table}", page.title());
    println!("{} من {} سجل", rows.len(), page.len());
    Ok(())
}
