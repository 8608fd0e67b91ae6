//! Named order dialogs: which are open, and the page-level listeners that
//! close them.

use std::collections::BTreeSet;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlOptionElement, HtmlSelectElement, KeyboardEvent};
use yew::prelude::*;

use crate::config::{PRESELECT_DELAY_MS, STREAMING_MODAL};
use crate::scroll_lock::{hold_while, ScrollLock, ScrollLockGuard};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open(String),
    Close(String),
    CloseAll,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: BTreeSet<String>,
}

impl ModalState {
    pub fn is_open(&self, name: &str) -> bool {
        self.open.contains(name)
    }

    pub fn any_open(&self) -> bool {
        !self.open.is_empty()
    }

    pub fn apply(&self, action: ModalAction) -> Self {
        let mut open = self.open.clone();
        match action {
            ModalAction::Open(name) => {
                open.insert(name);
            }
            ModalAction::Close(name) => {
                open.remove(&name);
            }
            ModalAction::CloseAll => open.clear(),
        }
        Self { open }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("modal {:?}", action);
        Rc::new(self.apply(action))
    }
}

pub type ModalContext = UseReducerHandle<ModalState>;

/// Where a click on a modal overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The dimmed overlay itself.
    Backdrop,
    /// Anything inside the dialog panel.
    Panel,
}

impl ClickOrigin {
    pub fn classify(target_is_overlay: bool) -> Self {
        if target_is_overlay {
            ClickOrigin::Backdrop
        } else {
            ClickOrigin::Panel
        }
    }

    /// Yew delegates listeners to the app root, so `current_target` is not
    /// the overlay; the target is compared against the overlay's node.
    pub fn of(e: &MouseEvent, overlay: &NodeRef) -> Self {
        let target = e.target_dyn_into::<Element>();
        let overlay = overlay.cast::<Element>();
        Self::classify(matches!((target, overlay), (Some(t), Some(o)) if t == o))
    }
}

pub fn overlay_click(name: &str, origin: ClickOrigin) -> Option<ModalAction> {
    match origin {
        ClickOrigin::Backdrop => Some(ModalAction::Close(name.to_string())),
        ClickOrigin::Panel => None,
    }
}

pub fn overlay_id(name: &str) -> String {
    format!("modal-{}", name)
}

/// Index of the first option whose text is exactly `wanted`.
pub fn option_index<'a>(texts: impl IntoIterator<Item = &'a str>, wanted: &str) -> Option<usize> {
    texts.into_iter().position(|text| text == wanted)
}

/// Opens the streaming modal with `platform` preselected in its required
/// select once the dialog has rendered.
pub fn open_streaming_order(modals: &ModalContext, platform: String) {
    modals.dispatch(ModalAction::Open(STREAMING_MODAL.to_string()));
    Timeout::new(PRESELECT_DELAY_MS, move || preselect_platform(&platform)).forget();
}

fn preselect_platform(platform: &str) {
    let selector = format!("#{} .form-select[required]", overlay_id(STREAMING_MODAL));
    let Some(select) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        debug!("no platform select to preselect");
        return;
    };

    let texts: Vec<String> = (0..select.length())
        .filter_map(|i| select.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.text())
        .collect();
    if let Some(index) = option_index(texts.iter().map(String::as_str), platform) {
        select.set_selected_index(index as i32);
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalHostProps {
    pub children: Children,
}

/// Owns the modal registry. Holds the scroll lock while any modal is open
/// and closes every modal on Escape.
#[function_component(ModalHost)]
pub fn modal_host(props: &ModalHostProps) -> Html {
    let modals = use_reducer(ModalState::default);
    let scroll_lock = use_context::<ScrollLock>();
    let guard = use_mut_ref(|| None::<ScrollLockGuard>);

    {
        let guard = guard.clone();
        use_effect_with_deps(
            move |any_open| {
                match scroll_lock {
                    Some(lock) => hold_while(*any_open, &lock, &mut guard.borrow_mut()),
                    None if *any_open => warn!("modal opened without a scroll lock"),
                    None => {}
                }
                || ()
            },
            modals.any_open(),
        );
    }

    {
        let dispatcher = modals.dispatcher();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        dispatcher.dispatch(ModalAction::CloseAll);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    if document
                        .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not listen for Escape");
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ModalContext> context={modals}>
            { for props.children.iter() }
        </ContextProvider<ModalContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(name: &str) -> ModalAction {
        ModalAction::Open(name.to_string())
    }

    #[test]
    fn open_then_close() {
        let state = ModalState::default().apply(open("activation"));
        assert!(state.is_open("activation"));
        assert!(state.any_open());

        let state = state.apply(ModalAction::Close("activation".into()));
        assert!(!state.any_open());
    }

    #[test]
    fn escape_closes_everything() {
        let state = ModalState::default()
            .apply(open("activation"))
            .apply(open("studio"))
            .apply(ModalAction::CloseAll);
        assert!(!state.any_open());
    }

    #[test]
    fn closing_unknown_modal_is_a_no_op() {
        let state = ModalState::default().apply(open("studio"));
        assert_eq!(state.apply(ModalAction::Close("nope".into())), state);
    }

    #[test]
    fn reducer_matches_apply() {
        let state = Rc::new(ModalState::default());
        let next = state.reduce(open("installation"));
        assert!(next.is_open("installation"));
    }

    #[test]
    fn click_on_the_overlay_node_is_a_backdrop_click() {
        assert_eq!(ClickOrigin::classify(true), ClickOrigin::Backdrop);
        assert_eq!(ClickOrigin::classify(false), ClickOrigin::Panel);
        assert_eq!(
            overlay_click("activation", ClickOrigin::classify(true)),
            Some(ModalAction::Close("activation".into()))
        );
        assert_eq!(overlay_click("activation", ClickOrigin::classify(false)), None);
    }

    #[test]
    fn only_backdrop_clicks_close() {
        assert_eq!(
            overlay_click("studio", ClickOrigin::Backdrop),
            Some(ModalAction::Close("studio".into()))
        );
        assert_eq!(overlay_click("studio", ClickOrigin::Panel), None);
    }

    #[test]
    fn panel_clicks_keep_the_modal_open() {
        let mut state = ModalState::default().apply(open("activation"));
        if let Some(action) = overlay_click("activation", ClickOrigin::Panel) {
            state = state.apply(action);
        }
        assert!(state.is_open("activation"));
        if let Some(action) = overlay_click("activation", ClickOrigin::Backdrop) {
            state = state.apply(action);
        }
        assert!(!state.any_open());
    }

    #[test]
    fn escape_restores_page_scroll() {
        let lock = ScrollLock::new(|_| {});
        let mut slot = None;

        let state = ModalState::default().apply(open("activation"));
        hold_while(state.any_open(), &lock, &mut slot);
        assert!(lock.is_locked());

        let state = state.apply(ModalAction::CloseAll);
        hold_while(state.any_open(), &lock, &mut slot);
        assert!(!lock.is_locked());
    }

    #[test]
    fn platform_lookup_is_exact() {
        let texts = ["Netflix", "Spotify", "Disney+"];
        assert_eq!(option_index(texts, "Disney+"), Some(2));
        assert_eq!(option_index(texts, "disney+"), None);
    }

    #[test]
    fn overlay_ids() {
        assert_eq!(overlay_id(STREAMING_MODAL), "modal-streaming-service");
    }
}
