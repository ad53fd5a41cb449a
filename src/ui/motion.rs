//! Reactive bindings between the animation model and the DOM.
//!
//! Components render tweens as inline styles; the hooks here only decide
//! *when* a tween is in its played state.

use leptos::html;
use leptos::prelude::*;

use crate::core::motion::{PinScrub, ScrollTrigger};

/// Played state of a scroll trigger attached to `target`.
///
/// Starts `false` (the tween's `from` state, which is also what the server
/// renders). The observer is disconnected when the owning component unmounts.
pub fn use_scroll_trigger(target: NodeRef<html::Div>, trigger: ScrollTrigger) -> ReadSignal<bool> {
    let (played, set_played) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<observer::TriggerObserver>);

        Effect::new(move |_| {
            let Some(element) = target.get() else {
                return;
            };
            match observer::TriggerObserver::observe(&element, trigger, set_played) {
                Ok(observer) => handle.set_value(Some(observer)),
                Err(err) => leptos::logging::warn!("scroll trigger unavailable: {:?}", err),
            }
        });

        on_cleanup(move || {
            handle.try_update_value(|observer| observer.take());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, trigger, set_played);

    played
}

#[cfg(feature = "hydrate")]
mod observer {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::motion::{ScrollTrigger, TriggerState};
    use crate::ui::dom;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// IntersectionObserver watching one element's trigger band
    pub struct TriggerObserver {
        observer: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl TriggerObserver {
        pub fn observe(
            element: &Element,
            trigger: ScrollTrigger,
            played: WriteSignal<bool>,
        ) -> Result<Self, wasm_bindgen::JsValue> {
            let mut state = TriggerState::new();

            let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let (_, viewport_height) = dom::viewport();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let rect = entry.bounding_client_rect();
                    let was_active = state.is_active();
                    let zone = trigger.zone(rect.top(), rect.bottom(), viewport_height);
                    let active = state.advance(zone, &trigger.actions);
                    if active != was_active {
                        played.set(active);
                    }
                }
            });

            let init = IntersectionObserverInit::new();
            init.set_root_margin(&trigger.root_margin());
            let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for TriggerObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Flips to `true` shortly after mount so time-based intros start from their
/// rendered `from` state
pub fn use_mount_intro() -> ReadSignal<bool> {
    let (started, set_started) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(16).await;
            set_started.set(true);
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = set_started;

    started
}

/// Pointer hover state for enter/leave tweens
#[derive(Clone, Copy, Debug)]
pub struct Hover(RwSignal<bool>);

impl Hover {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn enter(&self) {
        self.0.set(true);
    }

    pub fn leave(&self) {
        self.0.set(false);
    }

    pub fn get(&self) -> bool {
        self.0.get()
    }
}

impl Default for Hover {
    fn default() -> Self {
        Self::new()
    }
}

/// Horizontal carousel scrubbed by vertical scroll
#[derive(Clone, Copy)]
pub struct PinBinding {
    /// Measured layout; `None` when the carousel is not pinned
    pub geometry: ReadSignal<Option<PinScrub>>,
    /// Current track translation in px
    pub offset: ReadSignal<f64>,
}

/// Pin `section` and translate `track` as the page scrolls past it.
///
/// Whether to pin is decided once, at setup, from the viewport width. While
/// pinned, the geometry is re-measured on every resize.
pub fn use_pin_scrub(section: NodeRef<html::Div>, track: NodeRef<html::Div>) -> PinBinding {
    let (geometry, set_geometry) = signal(None::<PinScrub>);
    let (offset, set_offset) = signal(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::motion::is_wide;
        use crate::ui::dom;
        use leptos::ev;

        let measure = move || {
            let track = track.get_untracked()?;
            let (width, height) = dom::viewport();
            Some(PinScrub::new(track.scroll_width() as f64, width, height))
        };

        let follow_scroll = move || {
            let (Some(geometry), Some(section)) = (geometry.get_untracked(), section.get_untracked())
            else {
                return;
            };
            let top = section.get_bounding_client_rect().top();
            set_offset.set(geometry.offset_at(top));
        };

        Effect::new(move |_| {
            if section.get().is_none() || track.get().is_none() {
                return;
            }
            let (width, _) = dom::viewport();
            if !is_wide(width) {
                return;
            }
            set_geometry.set(measure());
            follow_scroll();
        });

        let on_scroll = window_event_listener(ev::scroll, move |_| follow_scroll());
        let on_resize = window_event_listener(ev::resize, move |_| {
            // Invalidate: only a carousel that was pinned at setup re-measures
            if geometry.get_untracked().is_some() {
                set_geometry.set(measure());
                follow_scroll();
            }
        });

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (section, track, set_geometry, set_offset);

    PinBinding { geometry, offset }
}
