use crate::utils::timer::Teardown;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Something on the page that can be brought into view.
pub trait ScrollTarget {
    fn scroll_into_view_smoothly(&self);
}

/// Resolves an in-page section identifier to a scrollable target.
pub trait SectionResolver {
    type Target: ScrollTarget;

    fn resolve(&self, section_id: &str) -> Option<Self::Target>;
}

/// Looks sections up in the live document by element id.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSections;

impl SectionResolver for BrowserSections {
    type Target = Element;

    fn resolve(&self, section_id: &str) -> Option<Element> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
    }
}

impl ScrollTarget for Element {
    fn scroll_into_view_smoothly(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Current vertical scroll offset of the window, if there is one.
pub fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|w| w.scroll_y().ok())
}

/// Calls `on_scroll` with the window's vertical offset on every `scroll`
/// event until the returned [`Teardown`] is released.
pub fn listen_scroll(on_scroll: impl Fn(f64) + 'static) -> Teardown {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available, scroll tracking disabled");
        return Teardown::noop();
    };
    let callback = Closure::<dyn Fn()>::new(move || {
        if let Some(offset) = scroll_y() {
            on_scroll(offset);
        }
    });
    if let Err(e) =
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
    {
        log::error!("Failed to add scroll listener: {:?}", e);
        return Teardown::noop();
    }
    Teardown::new(move || {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", e);
            }
        }
    })
}
