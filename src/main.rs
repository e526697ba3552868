use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use market_console::ApiError;
use market_console::model::Role;

mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

pub(crate) use cli_subcommands::{ProductsCommands, RemoteCommands, StoresCommands, UsersCommands};

#[derive(Parser)]
#[command(name = "market-console")]
#[command(about = "Marketplace admin console", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) global: GlobalArgs,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Args, Clone, Debug)]
pub(crate) struct GlobalArgs {
    /// Directory holding config.json and session.json
    #[arg(long, global = true, env = "MARKET_CONSOLE_DIR")]
    pub(crate) state_dir: Option<PathBuf>,

    /// Backend base URL (overrides config.json)
    #[arg(long, global = true, env = "MARKET_CONSOLE_URL")]
    pub(crate) url: Option<String>,

    /// Request timeout in seconds, 0 to disable (overrides config.json)
    #[arg(long, global = true)]
    pub(crate) timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Configure or show the backend connection
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// Log in and cache the user profile
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "MARKET_CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "MARKET_CONSOLE_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "CUSTOMER")]
        role: Role,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// End the session (server-side best effort, local state always cleared)
    Logout,

    /// Show the cached session
    Whoami {
        /// Re-fetch the profile from the backend
        #[arg(long)]
        refresh: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Totals, recent products and category breakdown
    Dashboard {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage users (admin)
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },

    /// Manage stores (admin, seller)
    Stores {
        #[command(subcommand)]
        command: StoresCommands,
    },

    /// Browse and manage products
    Products {
        #[command(subcommand)]
        command: ProductsCommands,
    },
}

fn main() {
    init_tracing();
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        if let Some(fields) = err
            .downcast_ref::<ApiError>()
            .and_then(ApiError::validation_errors)
        {
            for (field, problem) in fields {
                match problem.as_str() {
                    Some(problem) => eprintln!("  {}: {}", field, problem),
                    None => eprintln!("  {}: {}", field, problem),
                }
            }
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
