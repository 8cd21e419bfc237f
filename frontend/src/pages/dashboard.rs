use yew::prelude::*;
use yew_router::prelude::*;

use crate::menu::menu_for;
use crate::role::Role;
use crate::routes::Route;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub role: Role,
}

fn blurb(role: &Role) -> &'static str {
    match role {
        Role::Student => "Pick a topic, follow your milestones and keep your profile current.",
        Role::Lecturer => "Review the students you supervise and the topics you offer.",
        Role::Admin => "Manage lecturers, students and topics, and follow the reports.",
        Role::Unknown(_) => "",
    }
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_session();
    let name = session.as_ref().map(|s| s.display_name()).unwrap_or_default();

    // shortcuts: every menu entry but the dashboard itself
    let shortcuts = menu_for(&props.role, "")
        .into_iter()
        .skip(1)
        .filter_map(|item| Route::for_path(&item.path).map(|route| (item.label, route)));

    html! {
        <div class="dashboard">
            <h1>{ format!("Welcome, {name}") }</h1>
            <p>{ blurb(&props.role) }</p>
            <ul class="shortcuts">
                { for shortcuts.map(|(label, route)| html! {
                    <li><Link<Route> to={route}>{ label }</Link<Route>></li>
                }) }
            </ul>
        </div>
    }
}
