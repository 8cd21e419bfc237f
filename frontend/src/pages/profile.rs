use yew::prelude::*;

use crate::session::use_session;

#[function_component(Profile)]
pub fn profile() -> Html {
    let session = use_session();
    match session {
        None => html!(<p>{"Not signed in."}</p>),
        Some(user) => html! {
            <div class="profile">
                <h1>{ user.display_name() }</h1>
                <dl>
                    <dt>{"Role"}</dt>
                    <dd>{ user.role.to_string() }</dd>
                    <dt>{"Email"}</dt>
                    <dd>{ user.email.clone().unwrap_or_else(|| "—".into()) }</dd>
                </dl>
            </div>
        },
    }
}
