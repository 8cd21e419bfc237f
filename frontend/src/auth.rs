use gloo_net::http::Method;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::routes::Route;
use crate::session::{resolve_user, BrowserSession, SessionRecord};

/* -------------------------------------------------------------------------- */
/*                           payloads exchanged with the API                  */
/* -------------------------------------------------------------------------- */

#[derive(Serialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: serde_json::Value,
}

#[derive(Serialize)]
struct ForgotBody {
    email: String,
}

/* -------------------------------------------------------------------------- */
/*                                   helpers                                  */
/* -------------------------------------------------------------------------- */

/// Dashboard of the logged-in role; home when the role is not one we route.
pub fn landing_route(user: Option<&SessionRecord>) -> Route {
    user.filter(|u| u.role.is_known())
        .and_then(|u| Route::for_path(&u.role.dashboard_path()))
        .unwrap_or(Route::Home)
}

/// Presence check only: the first empty field, if any.
pub fn first_missing<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

/* -------------------------------------------------------------------------- */
/*                                 login form                                 */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator = use_navigator();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let message = use_state(String::new);

    let onsubmit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let message = message.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let email = input_value(&email_ref);
            let password = input_value(&password_ref);
            if let Some(field) = first_missing(&[("Email", email.as_str()), ("Password", password.as_str())]) {
                message.set(format!("{field} is required"));
                return;
            }

            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let body = LoginBody { email, password };
                match fetch_json::<_, LoginResponse>(Method::POST, "/auth/login", Some(&body)).await {
                    Ok(resp) => {
                        let user_json = resp.user.to_string();
                        if let Err(err) = BrowserSession::save(&resp.token, &user_json) {
                            error!("storing session: {err}");
                            message.set("Could not store the session in this browser".into());
                            return;
                        }
                        let user = resolve_user(Some(&user_json));
                        info!("logged in as {}", user.as_ref().map(|u| u.role.to_string()).unwrap_or_default());
                        if let Some(nav) = navigator {
                            nav.push(&landing_route(user.as_ref()));
                        }
                    }
                    Err(err) => {
                        error!("login: {err}");
                        message.set(format!("Login failed: {err}"));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{"Sign in"}</h2>

            <form {onsubmit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <input ref={password_ref} type="password" placeholder="Password" />
                <button type="submit">{"Sign in"}</button>
            </form>

            <Link<Route> to={Route::ForgotPassword}>{"Forgot password?"}</Link<Route>>

            if !message.is_empty() {
                <p class="form-error">{ &*message }</p>
            }
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                              forgot credential                             */
/* -------------------------------------------------------------------------- */

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let email_ref = use_node_ref();
    let message = use_state(String::new);

    let onsubmit = {
        let email_ref = email_ref.clone();
        let message = message.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let email = input_value(&email_ref);
            if let Some(field) = first_missing(&[("Email", email.as_str())]) {
                message.set(format!("{field} is required"));
                return;
            }

            let message = message.clone();
            spawn_local(async move {
                let body = ForgotBody { email };
                match fetch_empty(Method::POST, "/auth/forgot-password", Some(&body)).await {
                    Ok(()) => message.set("If the address is registered, a reset link is on its way.".into()),
                    Err(err) => {
                        error!("forgot-password: {err}");
                        message.set(format!("Request failed: {err}"));
                    }
                }
            });
        })
    };

    html! {
        <div class="login-container">
            <h2>{"Reset your password"}</h2>
            <form {onsubmit}>
                <input ref={email_ref} type="email" placeholder="Email" />
                <button type="submit">{"Send reset link"}</button>
            </form>
            <Link<Route> to={Route::Login}>{"Back to sign in"}</Link<Route>>
            if !message.is_empty() {
                <p class="form-info">{ &*message }</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_check_reports_first_blank_field() {
        assert_eq!(first_missing(&[("Email", "a@b.c"), ("Password", "  ")]), Some("Password"));
        assert_eq!(first_missing(&[("Email", ""), ("Password", "")]), Some("Email"));
        assert_eq!(first_missing(&[("Email", "a@b.c"), ("Password", "x")]), None);
    }

    #[test]
    fn login_lands_on_role_dashboard() {
        let lecturer = resolve_user(Some(r#"{"role":"lecturer"}"#));
        assert_eq!(landing_route(lecturer.as_ref()), Route::LecturerDashboard);
        let odd = resolve_user(Some(r#"{"role":"guest"}"#));
        assert_eq!(landing_route(odd.as_ref()), Route::Home);
        assert_eq!(landing_route(None), Route::Home);
    }
}
