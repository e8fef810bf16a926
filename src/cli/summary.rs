use colored::Colorize;

use crate::error::Result;
use crate::pages::PageId;
use crate::summary::Tone;

pub fn run(page: &str) -> Result<()> {
    let page = PageId::from_slug(page)?.open();
    println!("{}", page.title());
    for stat in page.stats() {
        let value = match stat.tone {
            Tone::Neutral => stat.value.normal(),
            Tone::Positive => stat.value.green(),
            Tone::Warning => stat.value.yellow(),
            Tone::Negative => stat.value.red(),
            Tone::Info => stat.value.cyan(),
        };
        println!("  {:<22} {value}", stat.label);
    }
    Ok(())
}
