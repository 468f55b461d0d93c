use yew::prelude::*;

pub mod config;
pub mod content;
pub mod hooks;
pub mod utils {
    pub mod timer;
    pub mod viewport;
}
pub mod state {
    pub mod modal;
    pub mod nav_menu;
    pub mod scroll_tracker;
    pub mod text_cycler;
}
pub mod components {
    pub mod cards;
    pub mod coming_soon_modal;
    pub mod cta_button;
    pub mod hero;
    pub mod navbar;
}
pub mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Landing /> }
}
