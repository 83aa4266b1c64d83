// Host-side tests for the rAF callback slot. The main crate is wasm-only, so
// the module is included directly.

mod callback_slot {
    include!("../src/callback_slot.rs");
}

use callback_slot::CallbackSlot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Box<dyn FnMut() -> bool>;

#[test]
fn callback_reaches_its_own_slot_while_alive() {
    let slot: CallbackSlot<Callback> = CallbackSlot::new(|weak| {
        Box::new(move || weak.upgrade().is_some()) as Callback
    });
    let rescheduled = slot
        .cell()
        .borrow_mut()
        .as_mut()
        .map(|cb| cb())
        .unwrap_or(false);
    assert!(rescheduled);
}

#[test]
fn dropping_the_slot_frees_the_callback_and_its_captures() {
    let captured = Rc::new(());
    let held = captured.clone();
    let slot: CallbackSlot<Callback> = CallbackSlot::new(move |weak| {
        Box::new(move || {
            let _keep = &held;
            weak.upgrade().is_some()
        }) as Callback
    });
    assert_eq!(Rc::strong_count(&captured), 2);
    drop(slot);
    assert_eq!(Rc::strong_count(&captured), 1);
}

#[test]
fn reopening_reuses_one_stored_callback() {
    struct Owner {
        running: bool,
        tick: Option<CallbackSlot<Callback>>,
    }
    let built = Rc::new(Cell::new(0));
    let owner = Rc::new(RefCell::new(Owner {
        running: false,
        tick: None,
    }));

    let start = |owner: &Rc<RefCell<Owner>>| {
        let mut o = owner.borrow_mut();
        if o.running {
            return;
        }
        o.running = true;
        let weak_owner = Rc::downgrade(owner);
        let built = built.clone();
        o.tick.get_or_insert_with(|| {
            built.set(built.get() + 1);
            CallbackSlot::new(move |_| Box::new(move || weak_owner.upgrade().is_some()) as Callback)
        });
    };

    for _ in 0..5 {
        start(&owner);
        owner.borrow_mut().running = false;
    }
    assert_eq!(built.get(), 1);
    // The stored callback holds its owner weakly: no reference cycle.
    assert_eq!(Rc::strong_count(&owner), 1);
    assert_eq!(Rc::weak_count(&owner), 1);
}
