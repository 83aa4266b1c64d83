use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Storage for a self-rescheduling callback.
///
/// The callback only ever sees a weak handle to its own slot, so dropping the
/// slot frees the callback and everything it captured.
pub struct CallbackSlot<C> {
    cell: Rc<RefCell<Option<C>>>,
}

impl<C> CallbackSlot<C> {
    pub fn new(make: impl FnOnce(Weak<RefCell<Option<C>>>) -> C) -> Self {
        let cell = Rc::new(RefCell::new(None));
        let callback = make(Rc::downgrade(&cell));
        *cell.borrow_mut() = Some(callback);
        Self { cell }
    }

    #[inline]
    pub fn cell(&self) -> &RefCell<Option<C>> {
        &self.cell
    }
}
