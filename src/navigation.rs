//! View state and the session observer the HTTP client notifies.

use std::fmt;
use std::sync::Mutex;

use crate::model::Role;
use crate::session::Session;

/// Callbacks for session lifecycle events raised by the API client.
pub trait SessionObserver: Send + Sync {
    /// The backend answered 401; the stores have already been cleared.
    fn session_invalidated(&self);

    /// An explicit logout finished; the stores have already been cleared.
    fn logged_out(&self);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SessionObserver for NoopObserver {
    fn session_invalidated(&self) {}

    fn logged_out(&self) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    Login {
        session_expired: bool,
        redirect: Option<String>,
    },
    Register,
    Dashboard,
    Products,
    Stores,
    Users,
}

impl View {
    pub fn login() -> Self {
        View::Login {
            session_expired: false,
            redirect: None,
        }
    }

    /// Login and register are reachable without a session.
    pub fn is_auth_entry(&self) -> bool {
        matches!(self, View::Login { .. } | View::Register)
    }

    /// Roles allowed to open this view; `None` means any authenticated user.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            View::Users => Some(&[Role::Admin]),
            View::Stores => Some(&[Role::Admin, Role::Seller]),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            View::Login {
                session_expired,
                redirect,
            } => {
                let mut query = Vec::new();
                if *session_expired {
                    query.push("session=expired".to_string());
                }
                if let Some(redirect) = redirect {
                    query.push(format!("redirect={}", urlencoding::encode(redirect)));
                }
                if query.is_empty() {
                    "/login".to_string()
                } else {
                    format!("/login?{}", query.join("&"))
                }
            }
            View::Register => "/register".to_string(),
            View::Dashboard => "/dashboard".to_string(),
            View::Products => "/products".to_string(),
            View::Stores => "/stores".to_string(),
            View::Users => "/users".to_string(),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug)]
struct NavState {
    current: View,
    history: Vec<View>,
}

/// Tracks the current view and performs redirects for session events.
#[derive(Debug)]
pub struct Navigator {
    state: Mutex<NavState>,
}

impl Navigator {
    pub fn new(start: View) -> Self {
        Self {
            state: Mutex::new(NavState {
                current: start,
                history: Vec::new(),
            }),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, NavState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn current(&self) -> View {
        self.state().current.clone()
    }

    /// Every navigation performed so far, oldest first. The start view is not included.
    pub fn history(&self) -> Vec<View> {
        self.state().history.clone()
    }

    pub fn navigate(&self, to: View) {
        let mut st = self.state();
        tracing::debug!(from = %st.current, to = %to, "navigate");
        st.current = to.clone();
        st.history.push(to);
    }

    /// Sends the user to the login view unless they are already on an
    /// authentication entry view. Returns whether a navigation happened.
    pub fn redirect_to_login(&self, session_expired: bool, redirect: Option<String>) -> bool {
        let mut st = self.state();
        if st.current.is_auth_entry() {
            return false;
        }
        let to = View::Login {
            session_expired,
            redirect,
        };
        tracing::debug!(from = %st.current, to = %to, "redirect to login");
        st.current = to.clone();
        st.history.push(to);
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(View::Dashboard)
    }
}

impl SessionObserver for Navigator {
    fn session_invalidated(&self) {
        if !self.redirect_to_login(true, None) {
            tracing::debug!("session invalidated while already on an auth view");
        }
    }

    fn logged_out(&self) {
        self.navigate(View::login());
    }
}

/// Page-load guard: the token must be valid, otherwise the user is sent to
/// login with the current path as redirect target.
pub fn require_auth(session: &Session, nav: &Navigator) -> bool {
    if session.is_authenticated() {
        return true;
    }
    tracing::warn!("not authenticated, redirecting to login");
    let from = nav.current();
    nav.navigate(View::Login {
        session_expired: false,
        redirect: Some(from.path()),
    });
    false
}

/// Page-load guard for role-restricted views. A role mismatch (or a missing
/// cached profile) sends the user to the dashboard.
pub fn require_role(session: &Session, nav: &Navigator, allowed: &[Role]) -> bool {
    if !require_auth(session, nav) {
        return false;
    }
    let user = session.users().get();
    match user {
        Some(user) if allowed.contains(&user.role) => true,
        other => {
            tracing::warn!(
                role = ?other.map(|u| u.role),
                "user does not have required role"
            );
            nav.navigate(View::Dashboard);
            false
        }
    }
}

/// Opens `view`, applying the guard its role requirements call for.
pub fn enter(session: &Session, nav: &Navigator, view: View) -> bool {
    nav.navigate(view.clone());
    match view.allowed_roles() {
        Some(roles) => require_role(session, nav, roles),
        None if view.is_auth_entry() => true,
        None => require_auth(session, nav),
    }
}

#[cfg(test)]
#[path = "tests/navigation/navigator_tests.rs"]
mod tests;
