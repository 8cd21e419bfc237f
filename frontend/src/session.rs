use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use gloo::events::EventListener;
use log::{error, warn};
use serde::{Deserialize, Deserializer};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::error::SessionError;
use crate::role::Role;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
/// Fired on `window` after this tab logs in or out.
pub const SESSION_EVENT: &str = "session-updated";

const NAME_PLACEHOLDER: &str = "User";

/* -------------------------------------------------------------------------- */
/*                              session record                                */
/* -------------------------------------------------------------------------- */

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

/* profile fields never invalidate the record: numbers become text, anything else is dropped */
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl SessionRecord {
    /// Parses the `user` storage entry. Anything but a JSON object is rejected.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        match serde_json::from_str::<serde_json::Value>(raw)? {
            value @ serde_json::Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(SessionError::NotAnObject),
        }
    }

    /// `fullName`, else "first last", else a placeholder.
    pub fn display_name(&self) -> String {
        if let Some(name) = non_blank(self.full_name.as_deref()) {
            return name.to_owned();
        }
        let composed = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect::<Vec<_>>()
            .join(" ");
        if composed.is_empty() {
            NAME_PLACEHOLDER.to_owned()
        } else {
            composed
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Raw `user` entry → record. A garbled entry counts as "not logged in".
pub fn resolve_user(raw: Option<&str>) -> Option<SessionRecord> {
    match SessionRecord::from_json(raw?) {
        Ok(record) => Some(record),
        Err(err) => {
            error!("ignoring stored session: {err}");
            None
        }
    }
}

/* -------------------------------------------------------------------------- */
/*                          source abstraction                                */
/* -------------------------------------------------------------------------- */

/// Listener registration; dropping it unregisters.
#[must_use = "dropping a Subscription unregisters the callback"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn noop() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Read side of the session store. The navigation shell never writes through it.
pub trait SessionSource {
    fn get(&self) -> Option<SessionRecord>;
    fn token(&self) -> Option<String>;
    /// `callback` carries no payload: listeners re-read through `get`.
    fn on_change(&self, callback: Callback<()>) -> Subscription;
}

/* ---------------- browser localStorage ---------------- */

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserSession;

fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SessionError::StorageUnavailable)
}

fn read_key(key: &str) -> Option<String> {
    match local_storage() {
        Ok(storage) => storage.get_item(key).ok().flatten(),
        Err(err) => {
            warn!("reading `{key}`: {err}");
            None
        }
    }
}

impl BrowserSession {
    /// Written by the login flow.
    pub fn save(token: &str, user_json: &str) -> Result<(), SessionError> {
        let storage = local_storage()?;
        storage
            .set_item(TOKEN_KEY, token)
            .and_then(|_| storage.set_item(USER_KEY, user_json))
            .map_err(|_| SessionError::StorageUnavailable)?;
        Self::notify_changed();
        Ok(())
    }

    /// Logout: both entries go.
    pub fn clear() {
        match local_storage() {
            Ok(storage) => {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
            Err(err) => warn!("clearing session: {err}"),
        }
        Self::notify_changed();
    }

    /// Same-tab signal; other tabs get the native `storage` event.
    pub fn notify_changed() {
        let Some(window) = web_sys::window() else { return };
        match web_sys::Event::new(SESSION_EVENT) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(err) => error!("cannot build {SESSION_EVENT} event: {err:?}"),
        }
    }
}

impl SessionSource for BrowserSession {
    fn get(&self) -> Option<SessionRecord> {
        resolve_user(read_key(USER_KEY).as_deref())
    }

    fn token(&self) -> Option<String> {
        read_key(TOKEN_KEY)
    }

    fn on_change(&self, callback: Callback<()>) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };
        let other_tabs = {
            let callback = callback.clone();
            EventListener::new(&window, "storage", move |_| callback.emit(()))
        };
        let this_tab = EventListener::new(&window, SESSION_EVENT, move |_| callback.emit(()));
        Subscription::new(move || drop((other_tabs, this_tab)))
    }
}

/* ---------------- in-memory ---------------- */

#[derive(Default)]
struct MemoryInner {
    token: Option<String>,
    user: Option<String>,
    next_id: usize,
    listeners: Vec<(usize, Callback<()>)>,
}

/// Store kept in memory; clones share state.
#[derive(Clone, Default)]
pub struct MemorySession {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemorySession {
    pub fn new(token: Option<&str>, user: Option<&str>) -> Self {
        let session = Self::default();
        {
            let mut inner = session.inner.borrow_mut();
            inner.token = token.map(str::to_owned);
            inner.user = user.map(str::to_owned);
        }
        session
    }

    /// Replaces both entries and notifies every listener.
    pub fn set(&self, token: Option<&str>, user: Option<&str>) {
        let listeners: Vec<Callback<()>> = {
            let mut inner = self.inner.borrow_mut();
            inner.token = token.map(str::to_owned);
            inner.user = user.map(str::to_owned);
            inner.listeners.iter().map(|(_, cb)| cb.clone()).collect()
        };
        for cb in listeners {
            cb.emit(());
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl SessionSource for MemorySession {
    fn get(&self) -> Option<SessionRecord> {
        resolve_user(self.inner.borrow().user.as_deref())
    }

    fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    fn on_change(&self, callback: Callback<()>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, callback));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }
}

/* -------------------------------------------------------------------------- */
/*                         context + hooks (Yew)                              */
/* -------------------------------------------------------------------------- */

#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionSource>);

impl SessionHandle {
    pub fn new(source: impl SessionSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn browser() -> Self {
        Self::new(BrowserSession)
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SessionHandle {
    type Target = dyn SessionSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_else(SessionHandle::browser)]
    pub source: SessionHandle,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    html! {
        <ContextProvider<SessionHandle> context={props.source.clone()}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}

/// Falls back to browser storage outside a `SessionProvider`.
#[hook]
pub fn use_session_source() -> SessionHandle {
    use_context::<SessionHandle>().unwrap_or_else(SessionHandle::browser)
}

/// Hands the current session to `on_read` now and again after every change
/// signal, until the returned subscription is dropped.
pub fn watch_session(source: &SessionHandle, on_read: Callback<Option<SessionRecord>>) -> Subscription {
    on_read.emit(source.get());
    let reader = source.clone();
    source.on_change(Callback::from(move |()| on_read.emit(reader.get())))
}

/// Current session, re-read on every route change and every change signal.
#[hook]
pub fn use_session() -> Option<SessionRecord> {
    let source = use_session_source();
    let path = use_location().map(|l| l.path().to_owned()).unwrap_or_default();
    let session = use_state_eq(|| source.get());

    {
        let session = session.clone();
        use_effect_with((source, path), move |(source, _)| {
            let subscription = watch_session(source, Callback::from(move |read: Option<SessionRecord>| session.set(read)));
            move || drop(subscription)
        });
    }

    (*session).clone()
}
