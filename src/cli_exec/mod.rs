use anyhow::{Context, Result};

use market_console::navigation::View;

use crate::cli_runtime::Console;
use crate::{Commands, GlobalArgs, ProductsCommands, RemoteCommands, StoresCommands, UsersCommands};

mod catalog;
mod dashboard;
mod identity;
mod remote_admin;
mod users;

pub(super) fn handle_command(global: &GlobalArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Remote { command } => remote_admin::handle_remote_command(global, command),
        Commands::Login {
            email,
            password,
            json,
        } => identity::handle_login_command(
            &Console::open(global, View::login())?,
            email,
            password,
            json,
        ),
        Commands::Register {
            name,
            email,
            password,
            role,
            json,
        } => identity::handle_register_command(
            &Console::open(global, View::Register)?,
            name,
            email,
            password,
            role,
            json,
        ),
        Commands::Logout => {
            identity::handle_logout_command(&Console::open(global, View::Dashboard)?)
        }
        Commands::Whoami { refresh, json } => {
            identity::handle_whoami_command(&Console::open(global, View::Dashboard)?, refresh, json)
        }
        Commands::Dashboard { json } => {
            dashboard::handle_dashboard_command(&Console::open(global, View::Dashboard)?, json)
        }
        Commands::Users { command } => {
            users::handle_users_command(&Console::open(global, View::Users)?, command)
        }
        Commands::Stores { command } => {
            catalog::handle_stores_command(&Console::open(global, View::Stores)?, command)
        }
        Commands::Products { command } => {
            catalog::handle_products_command(&Console::open(global, View::Products)?, command)
        }
    }
}

pub(super) fn print_json<T: serde::Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
