//! Reveal-on-scroll wiring
//!
//! The page calls [`provide_reveal_flags`] once. It registers one one-shot
//! `IntersectionObserver` per [`RevealSection`], looked up by element id, and
//! exposes the shared flags to sections through [`use_revealed`].
//!
//! Sections are only hidden under
//! [`REVEAL_READY_CLASS`](crate::core::reveal::REVEAL_READY_CLASS), which the client
//! sets on `<html>` after hydration. Server-rendered markup stays visible.

use leptos::prelude::*;

use crate::core::{RevealFlags, RevealSection};

#[derive(Clone, Copy)]
struct RevealContext(RwSignal<RevealFlags>);

/// Create the page's reveal flags and start observing every section.
pub fn provide_reveal_flags(threshold: f64) -> RwSignal<RevealFlags> {
    let flags = RwSignal::new(RevealFlags::default());

    mark_reveal_ready();
    for section in RevealSection::ALL {
        observe_once(section, threshold, flags);
    }

    provide_context(RevealContext(flags));
    flags
}

/// Whether `section` has been scrolled into view yet.
///
/// Outside a page that called [`provide_reveal_flags`] everything counts as
/// revealed, so sections never stay invisible.
pub fn use_revealed(section: RevealSection) -> Signal<bool> {
    match use_context::<RevealContext>() {
        Some(RevealContext(flags)) => {
            Signal::derive(move || flags.with(|f| f.is_revealed(section)))
        }
        None => Signal::derive(|| true),
    }
}

/// Something that stops delivering observations when disconnected
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
trait Disconnect {
    fn disconnect(&self);
}

/// Owns an observer together with the JS callback it invokes.
///
/// Dropping the guard disconnects the observer before the callback is freed,
/// so the browser never calls into a dropped closure.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct ObserverGuard<O: Disconnect, C> {
    observer: O,
    _callback: C,
}

impl<O: Disconnect, C> Drop for ObserverGuard<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(feature = "hydrate")]
impl Disconnect for web_sys::IntersectionObserver {
    fn disconnect(&self) {
        web_sys::IntersectionObserver::disconnect(self);
    }
}

#[cfg(feature = "hydrate")]
fn mark_reveal_ready() {
    use crate::core::reveal::REVEAL_READY_CLASS;

    Effect::new(move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(e) = root.class_list().add_1(REVEAL_READY_CLASS) {
            leptos::logging::warn!("could not enable reveal animations: {:?}", e);
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn mark_reveal_ready() {}

/// Watch the element with id `section.element_id()` and flip its flag the
/// first time it intersects the viewport, then stop observing.
///
/// The observer and its callback live until the page unmounts.
#[cfg(feature = "hydrate")]
fn observe_once(section: RevealSection, threshold: f64, flags: RwSignal<RevealFlags>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type JsCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    let guard = StoredValue::new_local(None::<ObserverGuard<IntersectionObserver, JsCallback>>);
    on_cleanup(move || {
        let _ = guard.try_update_value(|slot| slot.take());
    });

    Effect::new(move |_| {
        let Some(target) = document().get_element_by_id(section.element_id()) else {
            leptos::logging::warn!("reveal target #{} not found", section);
            return;
        };

        let callback = JsCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let revealed = flags
                    .try_update(|f| f.observe(section, entry.is_intersecting()))
                    .unwrap_or(false);
                if revealed {
                    observer.disconnect();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&target);
                guard.set_value(Some(ObserverGuard {
                    observer,
                    _callback: callback,
                }));
            }
            Err(e) => {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                flags.update(|f| {
                    f.reveal(section);
                });
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn observe_once(_section: RevealSection, _threshold: f64, _flags: RwSignal<RevealFlags>) {}
