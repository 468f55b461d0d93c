use crate::state::modal::{ClickOrigin, ModalAction, ModalHandle};
use yew::prelude::*;

#[function_component(ComingSoonModal)]
pub fn coming_soon_modal() -> Html {
    let modal = use_context::<ModalHandle>();
    let Some(modal) = modal else {
        return html! {};
    };
    if !modal.visible {
        return html! {};
    }

    let on_backdrop = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Click(ClickOrigin::Backdrop)))
    };
    let on_body = {
        let modal = modal.clone();
        // Clicks inside the dialog must never reach the backdrop handler.
        // The reducer ignores `DialogBody` clicks for the same reason.
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            modal.dispatch(ModalAction::Click(ClickOrigin::DialogBody));
        })
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Close))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-dialog glass-card" role="dialog" aria-modal="true" onclick={on_body}>
                <div class="modal-icon">{"⚙️"}</div>
                <h3>{"서비스 준비 중입니다"}</h3>
                <p>{"더 나은 경험을 위해 파묘 팀이 열심히 개발하고 있어요."}</p>
                <button class="modal-confirm" onclick={on_close}>{"확인"}</button>
            </div>
        </div>
    }
}
