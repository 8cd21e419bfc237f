use gloo_net::http::Method;
use log::{error, info};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_empty;
use crate::auth::first_missing;
use crate::routes::Route;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TopicRegistration {
    topic_code: String,
    note: String,
}

#[function_component(RegisterTopic)]
pub fn register_topic() -> Html {
    let navigator = use_navigator();
    let code_ref = use_node_ref();
    let note_ref = use_node_ref();
    let message = use_state(String::new);

    let onsubmit = {
        let code_ref = code_ref.clone();
        let note_ref = note_ref.clone();
        let message = message.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            let topic_code = read(&code_ref);
            let note = read(&note_ref);
            if let Some(field) = first_missing(&[("Topic code", topic_code.as_str())]) {
                message.set(format!("{field} is required"));
                return;
            }

            let message = message.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let body = TopicRegistration { topic_code, note };
                match fetch_empty(Method::POST, "/topics/register", Some(&body)).await {
                    Ok(()) => {
                        info!("topic {} registered", body.topic_code);
                        if let Some(nav) = navigator {
                            nav.push(&Route::StudentProgress);
                        }
                    }
                    Err(err) => {
                        error!("register topic: {err}");
                        message.set(format!("Registration failed: {err}"));
                    }
                }
            });
        })
    };

    html! {
        <div class="register-topic">
            <h1>{"Register a topic"}</h1>
            <form {onsubmit}>
                <input ref={code_ref} type="text" placeholder="Topic code" />
                <input ref={note_ref} type="text" placeholder="Note for the lecturer (optional)" />
                <button type="submit">{"Register"}</button>
            </form>
            if !message.is_empty() {
                <p class="form-error">{ &*message }</p>
            }
        </div>
    }
}
