use crate::browser::PageBrowser;
use crate::error::Result;
use crate::pages::PageId;
use crate::settings::{load_settings, remember_last_page};
use crate::tui::run_view;

/// Open the interactive browser. With no page argument, resume the page
/// the user was on last time.
pub fn run(page: Option<String>) -> Result<()> {
    let slug = page.unwrap_or_else(|| load_settings().last_page);
    let page_id = PageId::from_slug(&slug)?;
    remember_last_page(page_id.slug());
    let mut browser = PageBrowser::open(page_id);
    run_view(&mut browser)
}
