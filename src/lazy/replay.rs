use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::lazy::seq::LazySeq;

struct ReplayState<'a, T> {
    source: LazySeq<'a, T>,
    seen: Vec<T>,
}

/// A sequence that can be read many times while being computed only once.
///
/// Clones share one cache. An element is pulled from the source the first
/// time any clone asks for its index, and never before.
pub struct Replay<'a, T> {
    state: Rc<RefCell<ReplayState<'a, T>>>,
}

impl<'a, T: 'a> Replay<'a, T> {
    pub fn new(source: LazySeq<'a, T>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ReplayState {
                source,
                seen: Vec::new(),
            })),
        }
    }

    /// Apply `f` to the element at `index`, pulling from the source as far as needed.
    ///
    /// Returns `None` once the source is exhausted before `index`.
    /// `f` must not read from this same `Replay`.
    pub fn with<R, F>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let mut state = self.state.borrow_mut();
        while state.seen.len() <= index {
            let next = state.source.next()?;
            state.seen.push(next);
        }
        state.seen.get(index).map(f)
    }

    /// How many elements have been pulled from the source so far
    pub fn pulled(&self) -> usize {
        self.state.borrow().seen.len()
    }
}

impl<T> Clone for Replay<'_, T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for Replay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Replay").finish_non_exhaustive()
    }
}
