mod browser;
mod cli;
mod error;
mod export;
mod filter;
mod fixtures;
mod fmt;
mod form;
mod models;
mod pages;
mod persist;
mod settings;
mod store;
mod summary;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Browse { page }) => cli::browse::run(page),
        Some(Commands::List { page, query, filter }) => {
            cli::list::run(&page, query.as_deref(), &filter)
        }
        Some(Commands::Summary { page }) => cli::summary::run(&page),
        Some(Commands::Export { page, output, query, filter }) => {
            cli::export::run(&page, output, query.as_deref(), &filter)
        }
        Some(Commands::Report) => cli::report::run(),
        Some(Commands::Reset { page }) => cli::reset::run(page),
        Some(Commands::Config { user_name, data_dir }) => cli::config::run(user_name, data_dir),
        Some(Commands::Status) => cli::status::run(),
        // Bare `daftar` drops straight into the browser on the last page.
        None => cli::browse::run(None),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
