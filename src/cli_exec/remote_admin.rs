
use market_console::model::ConsoleConfig;

use super::*;
use crate::cli_runtime::{open_store, resolve_config};

pub(super) fn handle_remote_command(global: &GlobalArgs, command: RemoteCommands) -> Result<()> {
    let store = open_store(global)?;
    match command {
        RemoteCommands::Show { json } => {
            let cfg = resolve_config(&store, global)?;
            if json {
                print_json(&cfg, "remote")?;
            } else {
                println!("url: {}", cfg.base_url);
                if cfg.timeout_secs == 0 {
                    println!("timeout: none");
                } else {
                    println!("timeout: {}s", cfg.timeout_secs);
                }
                println!("state_dir: {}", store.root().display());
            }
        }
        RemoteCommands::Set { url, timeout_secs } => {
            let current = store.read_config()?;
            let cfg = ConsoleConfig {
                base_url: url.trim_end_matches('/').to_string(),
                timeout_secs: timeout_secs.unwrap_or(current.timeout_secs),
                ..current
            };
            store.write_config(&cfg)?;
            println!("Remote configured");
        }
    }
    Ok(())
}
