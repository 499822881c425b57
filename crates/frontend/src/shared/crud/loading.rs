//! Loading flags, drop guards and page lifetime tokens

use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Anything that can display a "busy" state
pub trait LoadingFlag {
    fn set_loading(&self, value: bool);
}

impl LoadingFlag for RwSignal<bool> {
    fn set_loading(&self, value: bool) {
        // The page may already be unmounted
        let _ = self.try_set(value);
    }
}

impl LoadingFlag for Rc<Cell<bool>> {
    fn set_loading(&self, value: bool) {
        self.set(value);
    }
}

/// In-flight operations sharing one busy indicator; busy until the last one ends
#[derive(Clone, Copy)]
pub struct BusyCounter(RwSignal<u32>);

impl BusyCounter {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn signal(&self) -> Signal<bool> {
        let count = self.0;
        Signal::derive(move || count.get() > 0)
    }
}

impl Default for BusyCounter {
    fn default() -> Self {
        Self::new()
    }
}

fn next_count(count: u32, loading: bool) -> u32 {
    if loading {
        count + 1
    } else {
        count.saturating_sub(1)
    }
}

impl LoadingFlag for BusyCounter {
    fn set_loading(&self, value: bool) {
        let _ = self.0.try_update(|count| *count = next_count(*count, value));
    }
}

/// Sets the flag on creation and clears it when dropped, on every exit path
pub struct LoadingGuard<F: LoadingFlag> {
    flag: F,
    armed: bool,
}

impl<F: LoadingFlag> LoadingGuard<F> {
    pub fn new(flag: F) -> Self {
        flag.set_loading(true);
        Self { flag, armed: true }
    }

    /// Leaves the flag untouched on drop (a newer request owns it)
    pub fn disarm(mut self) {
        self.armed = false;
    }
}

impl<F: LoadingFlag> Drop for LoadingGuard<F> {
    fn drop(&mut self) {
        if self.armed {
            self.flag.set_loading(false);
        }
    }
}

/// Cancelled when the owning page unmounts
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Token cancelled by the current reactive owner's cleanup
    pub fn for_current_owner() -> Self {
        let token = Self::new();
        let on_drop = token.clone();
        on_cleanup(move || on_drop.cancel());
        token
    }
}

/// Monotonic request counter: only the latest request may write results
#[derive(Clone, Debug, Default)]
pub struct RequestSeq(Arc<AtomicU64>);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallible(flag: Rc<Cell<bool>>, fail: bool) -> Result<(), String> {
        let _guard = LoadingGuard::new(flag.clone());
        assert!(flag.get());
        if fail {
            return Err("boom".into());
        }
        Ok(())
    }

    #[test]
    fn guard_clears_flag_on_every_outcome() {
        let flag = Rc::new(Cell::new(false));
        assert!(fallible(flag.clone(), true).is_err());
        assert!(!flag.get());
        assert!(fallible(flag.clone(), false).is_ok());
        assert!(!flag.get());
    }

    #[test]
    fn disarmed_guard_keeps_flag() {
        let flag = Rc::new(Cell::new(false));
        LoadingGuard::new(flag.clone()).disarm();
        assert!(flag.get());
    }

    struct Count(Rc<Cell<u32>>);

    impl LoadingFlag for Count {
        fn set_loading(&self, value: bool) {
            self.0.set(next_count(self.0.get(), value));
        }
    }

    #[test]
    fn overlapping_operations_keep_busy_until_last_ends() {
        let count = Rc::new(Cell::new(0));
        let export = LoadingGuard::new(Count(count.clone()));
        let remove = LoadingGuard::new(Count(count.clone()));
        assert_eq!(count.get(), 2);
        drop(export);
        assert_eq!(count.get(), 1);
        drop(remove);
        assert_eq!(count.get(), 0);
        Count(count.clone()).set_loading(false);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn latest_request_wins() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
