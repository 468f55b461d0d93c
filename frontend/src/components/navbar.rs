use crate::components::cta_button::CtaButton;
use crate::config::{SECTION_FEATURES, SECTION_SCENARIOS, SECTION_WHY};
use crate::state::nav_menu::{NavAction, NavMenu};
use crate::utils::viewport::{listen_scroll, scroll_y, BrowserSections};
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    (SECTION_FEATURES, "기능"),
    (SECTION_SCENARIOS, "스토리"),
    (SECTION_WHY, "차별점"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let nav = use_reducer(NavMenu::default);

    // Track scroll position for the bar style
    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(offset) = scroll_y() {
                    nav.dispatch(NavAction::Scrolled(offset));
                }
                let mut subscription = listen_scroll({
                    let nav = nav.clone();
                    move |offset| nav.dispatch(NavAction::Scrolled(offset))
                });
                move || subscription.release()
            },
            (),
        );
    }

    let navigate = {
        let nav = nav.clone();
        Callback::from(move |section_id: &'static str| {
            let mut menu = *nav;
            if menu.navigate_to(&BrowserSections, section_id) {
                nav.dispatch(NavAction::NavigationCompleted);
            }
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::ToggleMenu))
    };

    let links = |class: &'static str| -> Html {
        NAV_LINKS
            .iter()
            .map(|&(id, label)| {
                let onclick = navigate.reform(move |_: MouseEvent| id);
                html! { <button class={class} onclick={onclick}>{label}</button> }
            })
            .collect()
    };

    html! {
        <nav class={nav.bar_class()}>
            <div class="navbar-inner">
                <div class="brand">
                    <div class="brand-mark">{"P"}</div>
                    <span class="brand-name">{"pamyo"}</span>
                </div>

                <div class="nav-desktop">
                    { links("nav-link") }
                    <CtaButton class="nav-cta cta-glow">{"지금 시작하기"}</CtaButton>
                </div>

                <button class="nav-toggle" onclick={toggle_menu} aria-label="메뉴">
                    if nav.is_menu_open() {
                        <i class="fas fa-xmark"></i>
                    } else {
                        <i class="fas fa-bars"></i>
                    }
                </button>
            </div>

            if nav.is_menu_open() {
                <div class="nav-mobile">
                    { links("nav-mobile-link") }
                    <CtaButton class="nav-mobile-cta">{"내 메모 파묘하러 가기"}</CtaButton>
                </div>
            }
        </nav>
    }
}
