use gloo_net::http::Method;
use log::{error, info};
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::{fetch_empty, fetch_json};
use crate::auth::first_missing;

/* -------------------------------------------------------------------------- */
/*                                lecturers                                   */
/* -------------------------------------------------------------------------- */

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Absent on older records.
    #[serde(default)]
    pub accepting_new_students: Option<bool>,
}

impl Lecturer {
    /// Defaults to open only when the server sent nothing; an explicit `false` stays closed.
    pub fn is_accepting(&self) -> bool {
        self.accepting_new_students.unwrap_or(true)
    }
}

#[function_component(AdminLecturers)]
pub fn admin_lecturers() -> Html {
    let lecturers = use_state(Vec::<Lecturer>::new);

    {
        let lecturers = lecturers.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), Vec<Lecturer>>(Method::GET, "/lecturers", None::<&()>).await {
                    Ok(rows) => lecturers.set(rows),
                    Err(err) => error!("lecturers: {err}"),
                }
            });
            || ()
        });
    }

    html! {
        <div class="admin-lecturers">
            <h1>{"Lecturers"}</h1>
            <table class="table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Email"}</th><th>{"Department"}</th><th>{"Accepting students"}</th></tr>
                </thead>
                <tbody>
                    { for lecturers.iter().map(|l| html! {
                        <tr>
                            <td>{ l.full_name.clone() }</td>
                            <td>{ l.email.clone().unwrap_or_default() }</td>
                            <td>{ l.department.clone().unwrap_or_default() }</td>
                            <td>{ if l.is_accepting() { "Yes" } else { "No" } }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                 settings                                   */
/* -------------------------------------------------------------------------- */

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortalSettings {
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub max_students_per_lecturer: Option<u32>,
}

#[function_component(AdminSettings)]
pub fn admin_settings() -> Html {
    let settings = use_state(PortalSettings::default);
    let message = use_state(String::new);
    let year_ref = use_node_ref();
    let max_ref = use_node_ref();

    {
        let settings = settings.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), PortalSettings>(Method::GET, "/settings", None::<&()>).await {
                    Ok(s) => settings.set(s),
                    Err(err) => error!("settings: {err}"),
                }
            });
            || ()
        });
    }

    let onsubmit = {
        let year_ref = year_ref.clone();
        let max_ref = max_ref.clone();
        let message = message.clone();
        let settings = settings.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();
            let read = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|i| i.value())
                    .unwrap_or_default()
            };
            let year = read(&year_ref);
            let max = read(&max_ref);
            if let Some(field) = first_missing(&[("Academic year", year.as_str())]) {
                message.set(format!("{field} is required"));
                return;
            }

            let updated = PortalSettings {
                academic_year: year.trim().to_owned(),
                max_students_per_lecturer: max.trim().parse().ok(),
            };
            let message = message.clone();
            let settings = settings.clone();
            spawn_local(async move {
                match fetch_empty(Method::PUT, "/settings", Some(&updated)).await {
                    Ok(()) => {
                        info!("settings saved");
                        settings.set(updated);
                        message.set("Saved.".into());
                    }
                    Err(err) => {
                        error!("saving settings: {err}");
                        message.set(format!("Save failed: {err}"));
                    }
                }
            });
        })
    };

    let max_value = settings
        .max_students_per_lecturer
        .map(|m| m.to_string())
        .unwrap_or_default();

    html! {
        <div class="admin-settings">
            <h1>{"Settings"}</h1>
            <form {onsubmit}>
                <label>{"Academic year"}
                    <input ref={year_ref} type="text" value={settings.academic_year.clone()} />
                </label>
                <label>{"Max students per lecturer"}
                    <input ref={max_ref} type="number" min="1" value={max_value} />
                </label>
                <button type="submit">{"Save"}</button>
            </form>
            if !message.is_empty() {
                <p class="form-info">{ &*message }</p>
            }
        </div>
    }
}
