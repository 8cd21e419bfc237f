use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{ForgotPassword, LoginForm};
use crate::pages::{admin, dashboard::Dashboard, home::Home, lecturer, lists::ResourceList, profile::Profile, student};
use crate::role::Role;

/* -------------------------------------------------------------------------- */
/*                                route table                                 */
/* -------------------------------------------------------------------------- */

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    /* public */
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,

    /* student */
    #[at("/student/dashboard")]
    StudentDashboard,
    #[at("/student/topics")]
    StudentTopics,
    #[at("/student/register-topic")]
    StudentRegisterTopic,
    #[at("/student/progress")]
    StudentProgress,
    #[at("/student/profile")]
    StudentProfile,

    /* lecturer */
    #[at("/lecturer/dashboard")]
    LecturerDashboard,
    #[at("/lecturer/students")]
    LecturerStudents,
    #[at("/lecturer/topics")]
    LecturerTopics,
    #[at("/lecturer/schedule")]
    LecturerSchedule,
    #[at("/lecturer/profile")]
    LecturerProfile,

    /* admin */
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/admin/lecturers")]
    AdminLecturers,
    #[at("/admin/students")]
    AdminStudents,
    #[at("/admin/topics")]
    AdminTopics,
    #[at("/admin/reports")]
    AdminReports,
    #[at("/admin/settings")]
    AdminSettings,

    /// No page: the content area stays empty, chrome is unaffected.
    #[not_found]
    #[at("/unmatched")]
    Unmatched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Public,
    Student,
    Lecturer,
    Admin,
}

impl Route {
    pub fn segment(&self) -> Option<Segment> {
        use Route::*;
        match self {
            Home | Login | ForgotPassword => Some(Segment::Public),
            StudentDashboard | StudentTopics | StudentRegisterTopic | StudentProgress
            | StudentProfile => Some(Segment::Student),
            LecturerDashboard | LecturerStudents | LecturerTopics | LecturerSchedule
            | LecturerProfile => Some(Segment::Lecturer),
            AdminDashboard | AdminLecturers | AdminStudents | AdminTopics | AdminReports
            | AdminSettings => Some(Segment::Admin),
            Unmatched => None,
        }
    }

    /// Route for a menu/dashboard path, `None` when nothing is mounted there.
    pub fn for_path(path: &str) -> Option<Route> {
        match Route::recognize(path) {
            Some(Route::Unmatched) | None => None,
            found => found,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<Home />),
        Route::Login => html!(<LoginForm />),
        Route::ForgotPassword => html!(<ForgotPassword />),

        Route::StudentDashboard => html!(<Dashboard role={Role::Student} />),
        Route::StudentTopics => html!(<ResourceList title="Available topics" endpoint="/topics" columns={vec![("Title", "title"), ("Lecturer", "lecturerName"), ("Status", "status")]} />),
        Route::StudentRegisterTopic => html!(<student::RegisterTopic />),
        Route::StudentProgress => html!(<ResourceList title="My progress" endpoint="/students/me/progress" columns={vec![("Milestone", "title"), ("Due", "dueDate"), ("Status", "status")]} />),
        Route::StudentProfile => html!(<Profile />),

        Route::LecturerDashboard => html!(<Dashboard role={Role::Lecturer} />),
        Route::LecturerStudents => html!(<lecturer::LecturerStudents />),
        Route::LecturerTopics => html!(<ResourceList title="My topics" endpoint="/lecturers/me/topics" columns={vec![("Title", "title"), ("Student", "studentName"), ("Status", "status")]} />),
        Route::LecturerSchedule => html!(<ResourceList title="Schedule" endpoint="/lecturers/me/schedule" columns={vec![("Date", "date"), ("Student", "studentName"), ("Subject", "subject")]} />),
        Route::LecturerProfile => html!(<Profile />),

        Route::AdminDashboard => html!(<Dashboard role={Role::Admin} />),
        Route::AdminLecturers => html!(<admin::AdminLecturers />),
        Route::AdminStudents => html!(<ResourceList title="Students" endpoint="/students" columns={vec![("Name", "fullName"), ("Email", "email"), ("Class", "className")]} />),
        Route::AdminTopics => html!(<ResourceList title="Topics" endpoint="/topics" columns={vec![("Title", "title"), ("Lecturer", "lecturerName"), ("Status", "status")]} />),
        Route::AdminReports => html!(<ResourceList title="Reports" endpoint="/reports" columns={vec![("Report", "name"), ("Period", "period"), ("Value", "value")]} />),
        Route::AdminSettings => html!(<admin::AdminSettings />),

        Route::Unmatched => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::menu_for;

    #[test]
    fn paths_land_in_their_segment() {
        assert_eq!(Route::for_path("/").and_then(|r| r.segment()), Some(Segment::Public));
        assert_eq!(Route::for_path("/login"), Some(Route::Login));
        assert_eq!(Route::for_path("/forgot-password"), Some(Route::ForgotPassword));
        assert_eq!(Route::for_path("/student/progress"), Some(Route::StudentProgress));
        assert_eq!(Route::for_path("/lecturer/schedule").and_then(|r| r.segment()), Some(Segment::Lecturer));
        assert_eq!(Route::for_path("/admin/reports"), Some(Route::AdminReports));
    }

    #[test]
    fn unknown_paths_mount_nothing() {
        assert_eq!(Route::for_path("/guest/dashboard"), None);
        assert_eq!(Route::for_path("/admin/nope"), None);
        assert_eq!(Route::Unmatched.segment(), None);
    }

    #[test]
    fn every_menu_entry_has_a_page() {
        for role in [Role::Student, Role::Lecturer, Role::Admin] {
            for item in menu_for(&role, "/") {
                let route = Route::for_path(&item.path)
                    .unwrap_or_else(|| panic!("no route for {}", item.path));
                assert_ne!(route.segment(), Some(Segment::Public));
            }
        }
    }
}
