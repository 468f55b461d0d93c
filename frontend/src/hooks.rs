use crate::config::CycleTiming;
use crate::state::text_cycler::{CycleDriver, TextCycler};
use crate::utils::timer::BrowserScheduler;
use yew::prelude::*;

/// Text currently revealed by the hero typewriter. The timer loop lives as
/// long as the calling component is mounted.
#[hook]
pub fn use_typed_phrases(phrases: &'static [&'static str], timing: CycleTiming) -> String {
    let text = use_state(String::new);
    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let on_text = Callback::from(move |visible: String| text.set(visible));
                let driver = CycleDriver::new(
                    TextCycler::new(phrases.iter().copied(), timing),
                    BrowserScheduler,
                    on_text,
                );
                driver.start();
                move || driver.stop()
            },
            (),
        );
    }
    (*text).clone()
}
