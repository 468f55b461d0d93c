use crate::state::modal::{ModalAction, ModalHandle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Any button whose job is to say the product is not out yet.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let modal = use_context::<ModalHandle>();
    let onclick = Callback::from(move |_: MouseEvent| match &modal {
        Some(modal) => modal.dispatch(ModalAction::Open),
        None => log::warn!("CtaButton rendered outside the modal provider"),
    });
    html! {
        <button class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </button>
    }
}
