use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout::Logout;
use crate::menu::MenuItem;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub items: Vec<MenuItem>,
    pub expanded: bool,
    pub user_name: AttrValue,
    pub on_toggle: Callback<MouseEvent>,
}

fn menu_entry(item: &MenuItem, expanded: bool) -> Html {
    let class = classes!("nav-item", item.active.then_some("active"));
    let body = html! {
        <>
            <span class={classes!("nav-icon", item.icon.class())}></span>
            if expanded {
                <span class="nav-label">{ item.label }</span>
            }
        </>
    };

    // paths without a page (odd roles) still get a plain link
    match Route::for_path(&item.path) {
        Some(route) => html! {
            <li {class} title={item.label}>
                <Link<Route> to={route}>{ body }</Link<Route>>
            </li>
        },
        None => html! {
            <li {class} title={item.label}>
                <a href={item.path.clone()}>{ body }</a>
            </li>
        },
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let width_class = if props.expanded { "sidebar expanded" } else { "sidebar collapsed" };

    html! {
        <aside class={width_class}>
            <div class="sidebar-header">
                <button class="sidebar-toggle" onclick={props.on_toggle.clone()}>{ "☰" }</button>
                if props.expanded {
                    <span class="sidebar-user">{ props.user_name.clone() }</span>
                }
            </div>

            <nav class="nav">
                <ul class="nav-list">
                    { for props.items.iter().map(|item| menu_entry(item, props.expanded)) }
                </ul>
            </nav>

            <div class="sidebar-footer">
                <Logout />
            </div>
        </aside>
    }
}
