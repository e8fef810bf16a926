use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

/// With no flags, print the current settings; otherwise update them.
pub fn run(user_name: Option<String>, data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if user_name.is_none() && data_dir.is_none() {
        println!(
            "User:      {}",
            if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
        );
        println!("Data dir:  {}", settings.data_dir);
        println!("Last page: {}", settings.last_page);
        return Ok(());
    }

    if let Some(name) = user_name {
        settings.user_name = name;
    }
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
        std::fs::create_dir_all(&settings.data_dir)?;
    }
    save_settings(&settings)?;
    println!("Settings updated.");
    Ok(())
}
