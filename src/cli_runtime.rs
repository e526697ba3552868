use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use market_console::model::{ConsoleConfig, UserProfile};
use market_console::navigation::{self, Navigator, View};
use market_console::store::LocalStore;
use market_console::{ApiClient, Session};

use crate::{Cli, GlobalArgs};

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::cli_exec::handle_command(&cli.global, cli.command)
}

/// Everything a command needs: resolved config, the API client and the view
/// state the client reports session events to.
pub(crate) struct Console {
    pub(crate) config: ConsoleConfig,
    pub(crate) navigator: Arc<Navigator>,
    pub(crate) client: ApiClient,
}

impl Console {
    pub(crate) fn open(global: &GlobalArgs, start: View) -> Result<Self> {
        let store = Arc::new(open_store(global)?);
        let config = resolve_config(&store, global)?;
        let navigator = Arc::new(Navigator::new(start));
        let session = Session::new(store.clone());
        let client = ApiClient::new(&config, session)
            .context("build api client")?
            .with_observer(navigator.clone());
        tracing::debug!(
            base_url = %config.base_url,
            dir = %store.root().display(),
            "console opened"
        );
        Ok(Self {
            config,
            navigator,
            client,
        })
    }

    pub(crate) fn session(&self) -> &Session {
        self.client.session()
    }

    /// Runs the page-load guards for `view`.
    pub(crate) fn require_view(&self, view: View) -> Result<()> {
        if navigation::enter(self.session(), &self.navigator, view.clone()) {
            return Ok(());
        }
        match self.navigator.current() {
            View::Login { .. } => anyhow::bail!(
                "not logged in or session expired (run `market-console login --email ...`)"
            ),
            _ => anyhow::bail!(
                "You do not have permission to access {} (requires {})",
                view,
                view.allowed_roles()
                    .unwrap_or_default()
                    .iter()
                    .map(|r| r.as_str())
                    .collect::<Vec<_>>()
                    .join(" or ")
            ),
        }
    }

    /// The cached profile of the logged-in user; errors when the session is gone.
    pub(crate) fn require_user(&self) -> Result<UserProfile> {
        self.session()
            .current_user()
            .context("no cached user profile (run `market-console login --email ...`)")
    }
}

pub(crate) fn open_store(global: &GlobalArgs) -> Result<LocalStore> {
    let dir = match &global.state_dir {
        Some(dir) => dir.clone(),
        None => LocalStore::default_dir(&std::env::current_dir().context("get current dir")?),
    };
    LocalStore::open_or_init(&dir)
}

/// config.json, overridden by `--url` / `--timeout-secs` (or their env vars).
pub(crate) fn resolve_config(store: &LocalStore, global: &GlobalArgs) -> Result<ConsoleConfig> {
    let mut cfg = store.read_config()?;
    if let Some(url) = &global.url {
        cfg.base_url = url.clone();
    }
    if let Some(secs) = global.timeout_secs {
        cfg.timeout_secs = secs;
    }
    Ok(cfg)
}
