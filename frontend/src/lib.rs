//! Thesis portal frontend: brochure home page plus the admin / lecturer /
//! student portal, rendered with Yew.

use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod guard;
pub mod layout;
pub mod logger;
pub mod logout;
pub mod menu;
pub mod pages;
pub mod role;
pub mod routes;
pub mod session;
pub mod sidebar;

use crate::layout::MainLayout;
use crate::routes::{switch, Route};
use crate::session::SessionProvider;

/* -------------------- root component -------------------- */

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </SessionProvider>
        </BrowserRouter>
    }
}

/// Browser entry point.
pub fn run() {
    logger::init();
    log::info!("thesis portal starting, API at {}", config::api_base());
    yew::Renderer::<App>::new().render();
}
