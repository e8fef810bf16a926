use crate::error::Result;
use crate::pages::PageId;

/// Restore one page, or every page, to its seed records by deleting the
/// on-disk data files.
pub fn run(page: Option<String>) -> Result<()> {
    match page {
        Some(slug) => {
            let mut page = PageId::from_slug(&slug)?.open();
            page.reset()?;
            println!("تمت استعادة البيانات الافتراضية لصفحة {slug}");
        }
        None => {
            for page_id in PageId::ALL {
                let mut page = page_id.open();
                page.reset()?;
            }
            println!("تمت استعادة البيانات الافتراضية لكل الصفحات");
        }
    }
    Ok(())
}
