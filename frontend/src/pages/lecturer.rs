use gloo_net::http::Method;
use log::error;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_json;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SupervisedStudent {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub topic_title: Option<String>,
}

/* -------------------------------------------------------------------------- */
/*                          client-side pagination                            */
/* -------------------------------------------------------------------------- */

#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based, already clamped into range.
    pub number: usize,
    pub total_pages: usize,
}

/// Slice for page `number` (1-based). Out-of-range pages are clamped; an empty
/// list still has one (empty) page.
pub fn paginate<T>(items: &[T], number: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start.min(end)..end],
        number,
        total_pages,
    }
}

/* -------------------------------------------------------------------------- */
/*                              student list                                  */
/* -------------------------------------------------------------------------- */

#[function_component(LecturerStudents)]
pub fn lecturer_students() -> Html {
    let students = use_state(Vec::<SupervisedStudent>::new);
    let page = use_state(|| 1usize);
    let failed = use_state(|| None::<String>);

    {
        let students = students.clone();
        let failed = failed.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), Vec<SupervisedStudent>>(Method::GET, "/lecturers/me/students", None::<&()>).await {
                    Ok(rows) => students.set(rows),
                    Err(err) => {
                        error!("students: {err}");
                        failed.set(Some(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let current = paginate(students.as_slice(), *page, PAGE_SIZE);

    let go_to = |target: usize| {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.set(target))
    };

    html! {
        <div class="lecturer-students">
            <h1>{"My students"}</h1>
            if let Some(msg) = &*failed {
                <p class="form-error">{ msg.clone() }</p>
            }
            <table class="table">
                <thead>
                    <tr><th>{"Name"}</th><th>{"Email"}</th><th>{"Topic"}</th></tr>
                </thead>
                <tbody>
                    { for current.items.iter().map(|s| html! {
                        <tr>
                            <td>{ s.full_name.clone() }</td>
                            <td>{ s.email.clone().unwrap_or_default() }</td>
                            <td>{ s.topic_title.clone().unwrap_or_else(|| "—".into()) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
            <div class="pagination">
                <button disabled={current.number == 1} onclick={go_to(current.number.saturating_sub(1))}>{"‹"}</button>
                <span>{ format!("{} / {}", current.number, current.total_pages) }</span>
                <button disabled={current.number == current.total_pages} onclick={go_to(current.number + 1)}>{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_are_sliced_and_clamped() {
        let items: Vec<u32> = (1..=23).collect();

        let first = paginate(&items, 1, PAGE_SIZE);
        assert_eq!(first.items, &items[..10]);
        assert_eq!(first.total_pages, 3);

        let last = paginate(&items, 3, PAGE_SIZE);
        assert_eq!(last.items, &[21, 22, 23]);

        let beyond = paginate(&items, 9, PAGE_SIZE);
        assert_eq!(beyond.number, 3);
        let before = paginate(&items, 0, PAGE_SIZE);
        assert_eq!(before.number, 1);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 4, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }
}
