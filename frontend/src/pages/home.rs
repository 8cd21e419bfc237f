use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const SERVICES: &[(&str, &str)] = &[
    ("Employment history", "Past employers, titles and dates confirmed at the source."),
    ("Education", "Degrees and certificates checked with the issuing institution."),
    ("Identity", "Documents matched against official registries."),
    ("Criminal records", "Searches run with the candidate's written consent."),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <section class="hero">
                <h1>{"Background checks you can rely on"}</h1>
                <p>{"Verification for employers and universities, delivered in days rather than weeks."}</p>
                <Link<Route> classes="cta" to={Route::Login}>{"Portal sign in"}</Link<Route>>
            </section>

            <section class="services">
                { for SERVICES.iter().map(|(title, blurb)| html! {
                    <article class="service">
                        <h3>{ *title }</h3>
                        <p>{ *blurb }</p>
                    </article>
                }) }
            </section>
        </div>
    }
}
