use comfy_table::Table;

use crate::error::Result;
use crate::pages::PageId;
use crate::persist::page_path;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    println!(
        "User:      {}",
        if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
    );
    println!("Data dir:  {}", settings.data_dir);
    println!("Last page: {}", settings.last_page);
    println!();

    let mut table = Table::new();
    table.set_header(vec!["الصفحة", "السجلات", "الملف"]);
    for page_id in PageId::ALL {
        let page = page_id.open();
        let path = page_path(page_id.slug());
        let source = if path.exists() { "محفوظ" } else { "افتراضي" };
        table.add_row(vec![
            page.title().to_string(),
            page.len().to_string(),
            source.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
