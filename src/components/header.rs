use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::scroll_lock::{hold_while, ScrollLock, ScrollLockGuard};

pub fn is_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

const LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#streaming", "Streaming"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);
    let scroll_lock = use_context::<ScrollLock>();
    let guard = use_mut_ref(|| None::<ScrollLockGuard>);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        scrolled.set(is_scrolled(offset));
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not listen for scroll");
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // The drawer keeps the page from scrolling behind it.
    {
        let guard = guard.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(lock) = scroll_lock {
                    hold_while(*open, &lock, &mut guard.borrow_mut());
                }
                || ()
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header id="header" class={classes!("header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <a href="#" class="logo">{&props.brand}</a>
                <nav class="nav-desktop">
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </nav>
                <button
                    id="burger"
                    class={classes!("burger", (*menu_open).then_some("active"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <nav id="mobileNav" class={classes!("mobile-nav", (*menu_open).then_some("active"))}>
                { for LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                }) }
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_only_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(900.0));
    }
}
