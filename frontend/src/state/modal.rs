use std::rc::Rc;
use yew::{Reducible, UseReducerHandle};

/// Where a click on the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Backdrop,
    DialogBody,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open,
    Close,
    Click(ClickOrigin),
}

/// Visibility of the single "coming soon" dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: ModalAction) -> Rc<Self> {
        let visible = match action {
            ModalAction::Open => true,
            ModalAction::Close | ModalAction::Click(ClickOrigin::Backdrop) => false,
            // The dialog stops propagation, so a body click never counts
            // as a backdrop click.
            ModalAction::Click(ClickOrigin::DialogBody) => self.visible,
        };
        if visible == self.visible {
            // Same Rc means no re-render.
            self
        } else {
            Rc::new(Self { visible })
        }
    }
}

/// Shared with every call-to-action through a `ContextProvider`.
pub type ModalHandle = UseReducerHandle<ModalState>;

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(actions: &[ModalAction]) -> Rc<ModalState> {
        actions
            .iter()
            .fold(Rc::new(ModalState::default()), |state, action| {
                state.reduce(*action)
            })
    }

    #[test]
    fn starts_hidden() {
        assert!(!ModalState::default().visible);
    }

    #[test]
    fn open_is_idempotent() {
        let opened = apply(&[ModalAction::Open]);
        let again = opened.clone().reduce(ModalAction::Open);
        assert!(again.visible);
        assert!(Rc::ptr_eq(&opened, &again));
    }

    #[test]
    fn open_then_close() {
        assert!(!apply(&[ModalAction::Open, ModalAction::Close]).visible);
    }

    #[test]
    fn click_inside_dialog_keeps_it_open() {
        let state = apply(&[
            ModalAction::Open,
            ModalAction::Click(ClickOrigin::DialogBody),
        ]);
        assert!(state.visible);
    }

    #[test]
    fn backdrop_click_closes() {
        let state = apply(&[ModalAction::Open, ModalAction::Click(ClickOrigin::Backdrop)]);
        assert!(!state.visible);
    }

    #[test]
    fn close_while_hidden_is_noop() {
        let hidden = Rc::new(ModalState::default());
        let after = hidden.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&hidden, &after));
    }
}
