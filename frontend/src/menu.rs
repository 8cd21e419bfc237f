//! Role → sidebar entries.
//!
//! The first entry is always the role's dashboard. It is highlighted on any
//! path containing `dashboard`; the other entries only on an exact path match.

use crate::role::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Book,
    Edit,
    Chart,
    User,
    Users,
    Calendar,
    Report,
    Settings,
}

impl Icon {
    /// CSS class of the glyph in the sidebar stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Dashboard => "icon-dashboard",
            Icon::Book => "icon-book",
            Icon::Edit => "icon-edit",
            Icon::Chart => "icon-chart",
            Icon::User => "icon-user",
            Icon::Users => "icon-users",
            Icon::Calendar => "icon-calendar",
            Icon::Report => "icon-report",
            Icon::Settings => "icon-settings",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: Icon,
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

type Entry = (Icon, &'static str, &'static str);

const STUDENT_MENU: &[Entry] = &[
    (Icon::Book, "Topics", "/student/topics"),
    (Icon::Edit, "Register topic", "/student/register-topic"),
    (Icon::Chart, "Progress", "/student/progress"),
    (Icon::User, "Profile", "/student/profile"),
];

const LECTURER_MENU: &[Entry] = &[
    (Icon::Users, "Students", "/lecturer/students"),
    (Icon::Book, "Topics", "/lecturer/topics"),
    (Icon::Calendar, "Schedule", "/lecturer/schedule"),
    (Icon::User, "Profile", "/lecturer/profile"),
];

const ADMIN_MENU: &[Entry] = &[
    (Icon::Users, "Lecturers", "/admin/lecturers"),
    (Icon::Users, "Students", "/admin/students"),
    (Icon::Book, "Topics", "/admin/topics"),
    (Icon::Report, "Reports", "/admin/reports"),
    (Icon::Settings, "Settings", "/admin/settings"),
];

fn role_entries(role: &Role) -> &'static [Entry] {
    match role {
        Role::Student => STUDENT_MENU,
        Role::Lecturer => LECTURER_MENU,
        Role::Admin => ADMIN_MENU,
        Role::Unknown(_) => &[],
    }
}

/// Ordered navigation for `role`, with `active` computed against `current_path`.
pub fn menu_for(role: &Role, current_path: &str) -> Vec<MenuItem> {
    let dashboard = MenuItem {
        icon: Icon::Dashboard,
        label: "Dashboard",
        path: role.dashboard_path(),
        active: current_path.contains("dashboard"),
    };

    std::iter::once(dashboard)
        .chain(role_entries(role).iter().map(|&(icon, label, path)| MenuItem {
            icon,
            label,
            path: path.to_owned(),
            active: current_path == path,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.label).collect()
    }

    #[test]
    fn known_roles_start_with_their_dashboard() {
        for role in [Role::Student, Role::Lecturer, Role::Admin] {
            let menu = menu_for(&role, "/");
            assert!(menu.len() > 1);
            assert_eq!(menu[0].path, format!("/{role}/dashboard"));
        }
    }

    #[test]
    fn unknown_role_gets_single_dashboard_entry() {
        let menu = menu_for(&Role::parse(Some("guest")), "/guest/whatever");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label, "Dashboard");
        assert_eq!(menu[0].path, "/guest/dashboard");

        let menu = menu_for(&Role::Unknown(None), "/x");
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].label, "Dashboard");
        assert_eq!(menu[0].path, "/undefined/dashboard");
    }

    #[test]
    fn admin_reports_is_active() {
        let menu = menu_for(&Role::Admin, "/admin/reports");
        assert_eq!(
            labels(&menu),
            ["Dashboard", "Lecturers", "Students", "Topics", "Reports", "Settings"]
        );
        let active: Vec<_> = menu.iter().filter(|i| i.active).map(|i| i.label).collect();
        assert_eq!(active, ["Reports"]);
    }

    #[test]
    fn dashboard_uses_substring_match() {
        let menu = menu_for(&Role::Student, "/lecturer/dashboard");
        assert!(menu[0].active);
        let menu = menu_for(&Role::Student, "/student/topics/3");
        assert!(menu.iter().all(|i| !i.active));
    }

    #[test]
    fn same_input_same_output() {
        let a = menu_for(&Role::Lecturer, "/lecturer/students");
        let b = menu_for(&Role::Lecturer, "/lecturer/students");
        assert_eq!(a, b);
    }
}
