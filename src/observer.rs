//! Fire-once visibility subscriptions.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// A callback that runs at most once, however many times it is fired.
pub struct OneShot<F: FnOnce()> {
    callback: Option<F>,
}

impl<F: FnOnce()> OneShot<F> {
    pub fn new(callback: F) -> Self {
        Self { callback: Some(callback) }
    }

    /// Runs the callback if it has not run yet. Returns whether it ran.
    pub fn fire(&mut self) -> bool {
        match self.callback.take() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn is_spent(&self) -> bool {
        self.callback.is_none()
    }
}

/// Watches one element and calls `on_visible` the first time it
/// intersects the viewport, then stops watching it.
///
/// Dropping the handle disconnects the observer, so keep it alive for as
/// long as the element is mounted.
pub struct OnceVisible {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceVisible {
    pub fn observe(
        element: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        on_visible: impl FnOnce() + 'static,
    ) -> Option<Self> {
        let mut shot = OneShot::new(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        observer.unobserve(&entry.target());
                        shot.fire();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceVisible {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn fires_only_once() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut shot = OneShot::new(move || counter.set(counter.get() + 1));

        assert!(!shot.is_spent());
        assert!(shot.fire());
        assert!(!shot.fire());
        assert!(!shot.fire());
        assert!(shot.is_spent());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn stays_revealed_after_leaving_the_viewport() {
        let revealed = Rc::new(Cell::new(false));
        let flag = revealed.clone();
        let mut shot = OneShot::new(move || flag.set(true));

        for intersecting in [false, true, false, true, false] {
            if intersecting {
                shot.fire();
            }
        }
        assert!(revealed.get());
        assert!(shot.is_spent());
    }
}
