use colored::Colorize;

use crate::error::Result;
use crate::settings::{save_settings, settings_file_exists, shellexpand_path, Settings};

pub fn run(data_dir: Option<String>) -> Result<()> {
    if settings_file_exists() {
        println!("{}", "daftar is already set up; use `daftar config` to change settings.".yellow());
        return Ok(());
    }

    let mut settings = Settings::default();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    println!("Data dir: {}", settings.data_dir);
    println!("{}", "Setup complete. Run `daftar browse` to get started.".green());
    Ok(())
}
