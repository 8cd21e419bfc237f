//! Decides whether the navigation chrome is drawn at all.

use crate::menu::{menu_for, MenuItem};
use crate::session::SessionRecord;

/// Always rendered bare, logged in or not.
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/forgot-password"];

pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HiddenReason {
    PublicPath,
    NoSession,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChromeState {
    Hidden(HiddenReason),
    Shown { expanded: bool, menu: Vec<MenuItem> },
}

/// The four states the shell can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellState {
    NoSession,
    PublicPath,
    AuthenticatedExpanded,
    AuthenticatedCollapsed,
}

impl ChromeState {
    pub fn is_shown(&self) -> bool {
        matches!(self, ChromeState::Shown { .. })
    }

    pub fn shell_state(&self) -> ShellState {
        match self {
            ChromeState::Hidden(HiddenReason::NoSession) => ShellState::NoSession,
            ChromeState::Hidden(HiddenReason::PublicPath) => ShellState::PublicPath,
            ChromeState::Shown { expanded: true, .. } => ShellState::AuthenticatedExpanded,
            ChromeState::Shown { expanded: false, .. } => ShellState::AuthenticatedCollapsed,
        }
    }
}

/// Public paths win over a present session; a session with a garbled role
/// still gets chrome (with the one-entry menu).
pub fn derive_chrome(session: Option<&SessionRecord>, path: &str, expanded: bool) -> ChromeState {
    if is_public(path) {
        return ChromeState::Hidden(HiddenReason::PublicPath);
    }
    match session {
        None => ChromeState::Hidden(HiddenReason::NoSession),
        Some(record) => ChromeState::Shown {
            expanded,
            menu: menu_for(&record.role, path),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use crate::session::resolve_user;

    fn admin() -> SessionRecord {
        resolve_user(Some(r#"{"role":"admin","fullName":"A B"}"#)).unwrap()
    }

    #[test]
    fn public_paths_never_get_chrome() {
        let session = admin();
        for path in PUBLIC_PATHS {
            assert_eq!(
                derive_chrome(Some(&session), path, true),
                ChromeState::Hidden(HiddenReason::PublicPath)
            );
            assert_eq!(
                derive_chrome(None, path, true),
                ChromeState::Hidden(HiddenReason::PublicPath)
            );
        }
    }

    #[test]
    fn root_with_admin_session_is_bare() {
        let chrome = derive_chrome(Some(&admin()), "/", true);
        assert_eq!(chrome.shell_state(), ShellState::PublicPath);
    }

    #[test]
    fn no_session_hides_chrome() {
        for path in ["/admin/reports", "/student/dashboard", "/nowhere"] {
            assert_eq!(derive_chrome(None, path, false).shell_state(), ShellState::NoSession);
        }
    }

    #[test]
    fn malformed_storage_hides_chrome() {
        let session = resolve_user(Some("{not valid json"));
        assert!(session.is_none());
        assert!(!derive_chrome(session.as_ref(), "/lecturer/students", true).is_shown());
    }

    #[test]
    fn bad_role_still_shows_degraded_chrome() {
        let session = resolve_user(Some(r#"{"role":"janitor"}"#)).unwrap();
        match derive_chrome(Some(&session), "/janitor/dashboard", true) {
            ChromeState::Shown { menu, .. } => {
                assert_eq!(menu.len(), 1);
                assert_eq!(menu[0].path, "/janitor/dashboard");
            }
            other => panic!("expected chrome, got {other:?}"),
        }
    }

    #[test]
    fn admin_reports_shows_six_items() {
        match derive_chrome(Some(&admin()), "/admin/reports", false) {
            ChromeState::Shown { expanded, menu } => {
                assert!(!expanded);
                assert_eq!(menu.len(), 6);
                assert!(menu.iter().any(|i| i.label == "Reports" && i.active));
                assert_eq!(menu, menu_for(&Role::Admin, "/admin/reports"));
            }
            other => panic!("expected chrome, got {other:?}"),
        }
    }

    #[test]
    fn expand_flag_selects_shell_state() {
        let s = admin();
        assert_eq!(
            derive_chrome(Some(&s), "/admin/topics", true).shell_state(),
            ShellState::AuthenticatedExpanded
        );
        assert_eq!(
            derive_chrome(Some(&s), "/admin/topics", false).shell_state(),
            ShellState::AuthenticatedCollapsed
        );
    }
}
