use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::BrowserSession;

#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator();

    let onclick = Callback::from(move |_: MouseEvent| {
        // token + user go; listeners in this tab and others re-read and drop the chrome
        BrowserSession::clear();
        info!("logged out");
        if let Some(nav) = &navigator {
            nav.push(&Route::Login);
        }
    });

    html! { <button class="logout-button" {onclick}>{ "Log out" }</button> }
}
