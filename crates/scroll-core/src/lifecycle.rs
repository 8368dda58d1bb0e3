use std::cell::Cell;
use std::rc::Rc;

/// Cancellation flag shared between the animation loop and whoever may stop it.
///
/// Cancellation is one-way: once set, the loop releases its frame callback and
/// never reschedules.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Page hidden. A `persisted` page goes into the back/forward cache and can
    /// be shown again, so only a real teardown cancels the loop.
    /// Returns whether this call cancelled the loop.
    pub fn on_page_hide(&self, persisted: bool) -> bool {
        if persisted {
            return false;
        }
        self.cancel();
        true
    }
}
