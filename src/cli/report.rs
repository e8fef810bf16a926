use colored::Colorize;
use comfy_table::Table;

use crate::error::Result;
use crate::pages::PageId;
use crate::summary::Tone;

/// Monthly performance report: the reports page rendered as a table with
/// its aggregate cards underneath.
pub fn run() -> Result<()> {
    let page = PageId::Reports.open();
    let rows = page.visible("", &[]);

    let mut table = Table::new();
    table.set_header(page.headers());
    for row in &rows {
        table.add_row(row.cells.clone());
    }
    println!("{}\n{table}", page.title());

    println!();
    for stat in page.stats() {
        let value = match stat.tone {
            Tone::Positive => stat.value.green(),
            Tone::Negative => stat.value.red(),
            Tone::Info => stat.value.cyan(),
            _ => stat.value.normal(),
        };
        println!("  {:<18} {value}", stat.label);
    }
    Ok(())
}
