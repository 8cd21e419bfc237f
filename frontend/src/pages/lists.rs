use gloo_net::http::Method;
use log::error;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_json;

#[derive(Clone, PartialEq)]
enum LoadState {
    Loading,
    Loaded(Vec<Value>),
    Failed(String),
}

#[derive(Properties, PartialEq)]
pub struct ResourceListProps {
    pub title: AttrValue,
    pub endpoint: AttrValue,
    /// (header, JSON key)
    pub columns: Vec<(&'static str, &'static str)>,
}

/// Text for one cell; missing and null fields show a dash.
pub fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => "—".into(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Read-only table over `GET {endpoint}`.
#[function_component(ResourceList)]
pub fn resource_list(props: &ResourceListProps) -> Html {
    let state = use_state(|| LoadState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.endpoint.clone(), move |endpoint| {
            state.set(LoadState::Loading);
            let endpoint = endpoint.clone();
            spawn_local(async move {
                match fetch_json::<(), Vec<Value>>(Method::GET, &endpoint, None::<&()>).await {
                    Ok(rows) => state.set(LoadState::Loaded(rows)),
                    Err(err) => {
                        error!("{endpoint}: {err}");
                        state.set(LoadState::Failed(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*state {
        LoadState::Loading => html!(<p>{"Loading…"}</p>),
        LoadState::Failed(msg) => html!(<p class="form-error">{ msg.clone() }</p>),
        LoadState::Loaded(rows) if rows.is_empty() => html!(<p>{"Nothing here yet."}</p>),
        LoadState::Loaded(rows) => html! {
            <table class="table">
                <thead>
                    <tr>{ for props.columns.iter().map(|(header, _)| html!(<th>{ *header }</th>)) }</tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>{ for props.columns.iter().map(|(_, key)| html!(<td>{ cell_text(row, key) }</td>)) }</tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <div class="resource-list">
            <h1>{ props.title.clone() }</h1>
            { body }
        </div>
    }
}
