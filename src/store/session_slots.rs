use std::fs;
use std::sync::MutexGuard;

use anyhow::{Context, Result};

use crate::model::SessionState;
use crate::session::SessionStorage;

use super::{LocalStore, write_atomic};

impl LocalStore {
    fn lock_slots(&self) -> MutexGuard<'_, ()> {
        self.slots_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn read_session_state(&self) -> Result<SessionState> {
        let path = self.root.join("session.json");
        if !path.exists() {
            return Ok(SessionState {
                version: 1,
                ..SessionState::default()
            });
        }
        let bytes = fs::read(&path).context("read session.json")?;
        let st: SessionState = serde_json::from_slice(&bytes).context("parse session.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported session state version {}", st.version);
        }
        Ok(st)
    }

    /// State to modify and write back. An unreadable file is discarded and
    /// the second value is `true`, so the caller rewrites it.
    fn session_state_for_write(&self) -> (SessionState, bool) {
        match self.read_session_state() {
            Ok(st) => (st, false),
            Err(err) => {
                tracing::warn!(
                    error = %format!("{:#}", err),
                    "discarding unreadable session state"
                );
                (
                    SessionState {
                        version: 1,
                        ..SessionState::default()
                    },
                    true,
                )
            }
        }
    }

    pub fn write_session_state(&self, st: &SessionState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize session state")?;
        write_atomic(&self.root.join("session.json"), &bytes).context("write session.json")?;
        Ok(())
    }
}

impl SessionStorage for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock_slots();
        let st = self.read_session_state()?;
        Ok(st.slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock_slots();
        let (mut st, _) = self.session_state_for_write();
        st.slots.insert(key.to_string(), value.to_string());
        self.write_session_state(&st)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.lock_slots();
        let (mut st, recovered) = self.session_state_for_write();
        if st.slots.remove(key).is_none() && !recovered {
            return Ok(());
        }
        self.write_session_state(&st)
    }
}
