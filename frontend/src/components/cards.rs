use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    /// Font Awesome icon class, e.g. `fa-lock`.
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card glass-card">
            <div class="feature-icon">
                <i class={classes!("fas", props.icon.to_string())}></i>
            </div>
            <h3>{&props.title}</h3>
            <p>{&props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScenarioCardProps {
    pub title: AttrValue,
    pub content: AttrValue,
    pub author: AttrValue,
}

#[function_component(ScenarioCard)]
pub fn scenario_card(props: &ScenarioCardProps) -> Html {
    html! {
        <div class="scenario-card glass-card">
            <h4>{&props.title}</h4>
            <p class="scenario-quote">{format!("\"{}\"", props.content)}</p>
            <p class="scenario-author">{format!("— {}", props.author)}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScreenshotCardProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
}

#[function_component(ScreenshotCard)]
pub fn screenshot_card(props: &ScreenshotCardProps) -> Html {
    html! {
        <div class="screenshot-card">
            <div class="screenshot-glow"></div>
            <div class="screenshot-body glass-card">
                <div class="screenshot-frame">
                    <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
                </div>
                <h3>{&props.title}</h3>
                <p>{&props.description}</p>
            </div>
        </div>
    }
}
