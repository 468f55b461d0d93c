use crate::state::scroll_tracker::ScrollTracker;
use crate::utils::viewport::{ScrollTarget, SectionResolver};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    /// A section was scrolled to; collapses the mobile menu.
    NavigationCompleted,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavMenu {
    scroll: ScrollTracker,
    menu_open: bool,
}

impl NavMenu {
    pub fn is_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Smooth-scrolls to `section_id` and closes the menu. Unknown ids are
    /// ignored. Returns whether a section was found.
    pub fn navigate_to<R: SectionResolver>(&mut self, resolver: &R, section_id: &str) -> bool {
        match resolver.resolve(section_id) {
            Some(target) => {
                target.scroll_into_view_smoothly();
                self.menu_open = false;
                true
            }
            None => {
                log::debug!("No section with id {:?}, ignoring navigation", section_id);
                false
            }
        }
    }

    /// Classes for the `<nav>` element: transparent and tall at the top of
    /// the page, opaque and compact once scrolled.
    pub fn bar_class(&self) -> &'static str {
        if self.is_scrolled() {
            "navbar scrolled"
        } else {
            "navbar top"
        }
    }
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Scrolled(offset) => {
                if !next.scroll.observe(offset) {
                    return self;
                }
            }
            NavAction::ToggleMenu => next.toggle_menu(),
            NavAction::NavigationCompleted => {
                if !next.menu_open {
                    return self;
                }
                next.menu_open = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeSections {
        known: Vec<&'static str>,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    struct FakeTarget {
        id: String,
        scrolled: Rc<RefCell<Vec<String>>>,
    }

    impl ScrollTarget for FakeTarget {
        fn scroll_into_view_smoothly(&self) {
            self.scrolled.borrow_mut().push(self.id.clone());
        }
    }

    impl SectionResolver for FakeSections {
        type Target = FakeTarget;

        fn resolve(&self, section_id: &str) -> Option<FakeTarget> {
            self.known.iter().any(|k| *k == section_id).then(|| FakeTarget {
                id: section_id.to_string(),
                scrolled: self.scrolled.clone(),
            })
        }
    }

    fn page() -> FakeSections {
        FakeSections {
            known: vec!["features", "scenarios", "why"],
            ..Default::default()
        }
    }

    #[test]
    fn toggle_flips_menu() {
        let mut menu = NavMenu::default();
        menu.toggle_menu();
        assert!(menu.is_menu_open());
        menu.toggle_menu();
        assert!(!menu.is_menu_open());
    }

    #[test]
    fn navigate_scrolls_once_and_closes_menu() {
        let sections = page();
        let mut menu = NavMenu::default();
        menu.toggle_menu();
        assert!(menu.navigate_to(&sections, "features"));
        assert_eq!(*sections.scrolled.borrow(), vec!["features".to_string()]);
        assert!(!menu.is_menu_open());
    }

    #[test]
    fn navigate_with_closed_menu_leaves_it_closed() {
        let sections = page();
        let mut menu = NavMenu::default();
        assert!(menu.navigate_to(&sections, "features"));
        assert_eq!(sections.scrolled.borrow().len(), 1);
        assert!(!menu.is_menu_open());
    }

    #[test]
    fn unknown_section_is_silent_noop() {
        let sections = page();
        let mut menu = NavMenu::default();
        menu.toggle_menu();
        assert!(!menu.navigate_to(&sections, "does-not-exist"));
        assert!(sections.scrolled.borrow().is_empty());
        assert!(menu.is_menu_open());
    }

    #[test]
    fn scroll_action_only_rerenders_on_flip() {
        let menu = Rc::new(NavMenu::default());
        let same = menu.clone().reduce(NavAction::Scrolled(5.0));
        assert!(Rc::ptr_eq(&menu, &same));
        let scrolled = same.reduce(NavAction::Scrolled(21.0));
        assert!(scrolled.is_scrolled());
        assert_eq!(scrolled.bar_class(), "navbar scrolled");
        let still = scrolled.clone().reduce(NavAction::Scrolled(800.0));
        assert!(Rc::ptr_eq(&scrolled, &still));
    }

    #[test]
    fn reducer_toggle_and_navigation() {
        let menu = Rc::new(NavMenu::default())
            .reduce(NavAction::ToggleMenu)
            .reduce(NavAction::NavigationCompleted);
        assert!(!menu.is_menu_open());
        let closed = menu.clone().reduce(NavAction::NavigationCompleted);
        assert!(!closed.is_menu_open());
    }

    #[test]
    fn menu_state_survives_scrolling() {
        let menu = Rc::new(NavMenu::default())
            .reduce(NavAction::ToggleMenu)
            .reduce(NavAction::Scrolled(100.0));
        assert!(menu.is_menu_open());
        assert!(menu.is_scrolled());
    }
}
