use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

use catalog::{Catalog, CatalogError};
use cli::Cli;
use domain::models::SelectionState;
use services::output::print_err;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        let code = e
            .downcast_ref::<CatalogError>()
            .map(CatalogError::code)
            .unwrap_or("ERROR");
        print_err(cli.json, code, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = Catalog::load()?;
    let settings = services::settings::load_settings()?;

    // Restore the persisted selection; a saved code the catalog no longer
    // recognizes leaves the state unset, same as a fresh start.
    let saved = services::storage::load_state();
    let state = SelectionState {
        selected: saved.selected.filter(|code| catalog.contains(code)),
        category: settings.tips.default_category.clone(),
        compare: None,
    };

    commands::handle_commands(cli, &catalog, &settings, state)
}
