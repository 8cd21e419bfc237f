use std::rc::Rc;

use gloo::events::EventListener;
use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::{derive_chrome, ChromeState};
use crate::session::use_session;
use crate::sidebar::Sidebar;

/// Below this viewport width the sidebar is forced shut.
pub const COLLAPSE_BELOW_PX: f64 = 768.0;

/* -------------------------------------------------------------------------- */
/*                          sidebar expand / collapse                         */
/* -------------------------------------------------------------------------- */

/// In-memory only; a reload starts expanded again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub expanded: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { expanded: true }
    }
}

pub enum SidebarAction {
    Toggle,
    Resize(f64),
}

impl SidebarState {
    pub fn toggle(self) -> Self {
        Self { expanded: !self.expanded }
    }

    /// Narrowing collapses; widening leaves the state alone.
    pub fn on_resize(self, width: f64) -> Self {
        if width < COLLAPSE_BELOW_PX {
            Self { expanded: false }
        } else {
            self
        }
    }
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SidebarAction::Toggle => self.toggle(),
            SidebarAction::Resize(width) => self.on_resize(width),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Left margin of the content column.
pub fn content_margin(chrome: &ChromeState) -> &'static str {
    match chrome {
        ChromeState::Hidden(_) => "0",
        ChromeState::Shown { expanded: true, .. } => "250px",
        ChromeState::Shown { expanded: false, .. } => "80px",
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/* -------------------------------------------------------------------------- */
/*                                 shell                                      */
/* -------------------------------------------------------------------------- */

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let path = use_location().map(|l| l.path().to_owned()).unwrap_or_default();
    let session = use_session();
    let sidebar = use_reducer_eq(SidebarState::default);

    /* resize listener, lives as long as the shell */
    {
        let sidebar = sidebar.dispatcher();
        use_effect_with((), move |_| {
            if let Some(width) = viewport_width() {
                sidebar.dispatch(SidebarAction::Resize(width));
            }
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| {
                    if let Some(width) = viewport_width() {
                        sidebar.dispatch(SidebarAction::Resize(width));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let chrome = derive_chrome(session.as_ref(), &path, sidebar.expanded);
    debug!("{path}: {:?}", chrome.shell_state());
    let margin = content_margin(&chrome);

    let on_toggle = {
        let sidebar = sidebar.dispatcher();
        Callback::from(move |_: MouseEvent| sidebar.dispatch(SidebarAction::Toggle))
    };

    let user_name = session
        .as_ref()
        .map(|s| s.display_name())
        .unwrap_or_default();

    html! {
        <div class="app-shell">
            if let ChromeState::Shown { expanded, menu } = chrome {
                <Sidebar items={menu} {expanded} user_name={user_name} {on_toggle} />
            }
            <main class="main-content" style={format!("margin-left: {margin};")}>
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::HiddenReason;
    use crate::menu::menu_for;
    use crate::role::Role;

    #[test]
    fn narrowing_collapses_but_widening_does_not_expand() {
        let state = SidebarState::default();
        assert!(state.expanded);

        let narrow = state.on_resize(600.0);
        assert!(!narrow.expanded);

        let wide_again = narrow.on_resize(1024.0);
        assert!(!wide_again.expanded, "widening must not re-expand");
    }

    #[test]
    fn wide_viewport_keeps_user_choice() {
        let collapsed = SidebarState::default().toggle();
        assert_eq!(collapsed.on_resize(1440.0), collapsed);
        assert_eq!(collapsed.toggle(), SidebarState::default());
    }

    #[test]
    fn reducer_follows_the_same_rules() {
        let state = Rc::new(SidebarState::default());
        let state = state.reduce(SidebarAction::Resize(1024.0));
        assert!(state.expanded);
        let state = state.reduce(SidebarAction::Resize(600.0));
        assert!(!state.expanded);
        let state = state.reduce(SidebarAction::Resize(1024.0));
        assert!(!state.expanded);
        let state = state.reduce(SidebarAction::Toggle);
        assert!(state.expanded);
    }

    #[test]
    fn margin_tracks_chrome() {
        assert_eq!(content_margin(&ChromeState::Hidden(HiddenReason::NoSession)), "0");
        let menu = menu_for(&Role::Student, "/student/dashboard");
        assert_eq!(
            content_margin(&ChromeState::Shown { expanded: true, menu: menu.clone() }),
            "250px"
        );
        assert_eq!(content_margin(&ChromeState::Shown { expanded: false, menu }), "80px");
    }
}
