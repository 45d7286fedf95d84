//! View-state plumbing shared by the catalog view models

mod request_seq;

pub use request_seq::{RequestSeq, RequestTag};

use leptos::prelude::*;
use std::cell::RefCell;

/// Mutable access to a piece of view state.
///
/// Load/save workflows are written against this trait so that the browser
/// drives them through a Leptos signal and tests through a `RefCell`.
pub trait StateCell<T> {
    /// Run `f` on the state. `None` when the state no longer exists
    /// (the owning component was unmounted).
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
