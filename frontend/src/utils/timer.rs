use gloo_timers::callback::Timeout;

/// Something that can run a task once after a delay.
///
/// Dropping the returned handle cancels the task if it has not fired yet.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Schedules through `setTimeout` on the browser main thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Runs a release action at most once, either explicitly or on drop.
///
/// Effect destructors hand one of these back so unsubscribing a listener
/// twice (or dropping after an explicit release) never reaches the browser
/// API a second time.
pub struct Teardown {
    release: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }

    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn teardown_runs_once() {
        let count = Rc::new(Cell::new(0));
        let mut teardown = Teardown::new({
            let count = count.clone();
            move || count.set(count.get() + 1)
        });
        teardown.release();
        teardown.release();
        assert!(teardown.is_released());
        drop(teardown);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn teardown_releases_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let count = count.clone();
            let _teardown = Teardown::new(move || count.set(count.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dropped_handle_never_fires() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        let handle = scheduler.schedule(100, {
            let fired = fired.clone();
            Box::new(move || fired.set(true))
        });
        drop(handle);
        scheduler.advance(1_000);
        assert!(!fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn tasks_fire_in_deadline_order() {
        let scheduler = ManualScheduler::default();
        let log = Rc::new(std::cell::RefCell::new(Vec::new()));
        let _late = scheduler.schedule(50, {
            let log = log.clone();
            Box::new(move || log.borrow_mut().push("late"))
        });
        let _early = scheduler.schedule(10, {
            let log = log.clone();
            Box::new(move || log.borrow_mut().push("early"))
        });
        scheduler.advance(49);
        assert_eq!(*log.borrow(), vec!["early"]);
        scheduler.advance(1);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.now(), 50);
    }
}
