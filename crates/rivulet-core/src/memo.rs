//! Memoized sequences.
//!
//! A [`MemoizedSequence`] owns an append-only cache and the producer that
//! extends it. Producing index `i` advances the producer exactly once per
//! missing index, in order, and each produced value is cached forever.
//!
//! No borrow on the cache is held while the producer runs, so a producer may
//! read earlier indices of the very sequence it is extending. That reentrancy
//! is what makes guarded self-reference work; a reentrant request for an
//! index that does not exist yet is reported as
//! [`StreamError::UnguardedRecursion`].

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::error::{StreamError, StreamResult};

/// An ordered, stateful source of values.
///
/// `produce` is called with `index = 0, 1, 2, ...` in order, once per index.
/// Returning `Ok(None)` ends a finite sequence.
pub trait Producer<T> {
    /// Produces the value at `index`.
    ///
    /// # Errors
    ///
    /// Any error is recorded by the owning sequence and replayed on every
    /// later request past the cache.
    fn produce(&mut self, index: usize) -> StreamResult<Option<T>>;
}

impl<T, F> Producer<T> for F
where
    F: FnMut(usize) -> StreamResult<Option<T>>,
{
    fn produce(&mut self, index: usize) -> StreamResult<Option<T>> {
        self(index)
    }
}

/// Lifecycle of the producer owned by a sequence.
enum Slot<T> {
    /// Created through [`crate::Deferred`] and not bound yet.
    Unbound,
    /// Idle and ready to produce the next index.
    Ready(Box<dyn Producer<T>>),
    /// Taken out of the slot while it produces a value.
    Running,
    /// A finite producer returned `None`.
    Finished,
    /// The producer failed; its state can no longer be trusted.
    Failed(StreamError),
}

/// A lazily extended, permanently cached sequence of values.
pub struct MemoizedSequence<T> {
    cache: RefCell<Vec<T>>,
    slot: RefCell<Slot<T>>,
    // Other sequences this one reads and must outlive
    retained: RefCell<Vec<Rc<dyn Any>>>,
}

impl<T: Clone> MemoizedSequence<T> {
    /// Creates a sequence driven by `producer`.
    pub fn new(producer: impl Producer<T> + 'static) -> Self {
        Self {
            cache: RefCell::new(Vec::new()),
            slot: RefCell::new(Slot::Ready(Box::new(producer))),
            retained: RefCell::new(Vec::new()),
        }
    }

    /// Creates a sequence whose producer is attached later with [`Self::bind`].
    #[must_use]
    pub fn unbound() -> Self {
        Self {
            cache: RefCell::new(Vec::new()),
            slot: RefCell::new(Slot::Unbound),
            retained: RefCell::new(Vec::new()),
        }
    }

    /// Attaches a producer to an unbound sequence.
    ///
    /// Returns `false` (and drops `producer`) if the sequence was already bound.
    pub fn bind(&self, producer: Box<dyn Producer<T>>) -> bool {
        let mut slot = self.slot.borrow_mut();
        if matches!(*slot, Slot::Unbound) {
            *slot = Slot::Ready(producer);
            true
        } else {
            false
        }
    }

    /// Returns the value at `index`, producing and caching missing values first.
    ///
    /// # Errors
    ///
    /// - [`StreamError::Exhausted`] if a finite producer ends before `index`
    /// - [`StreamError::UnguardedRecursion`] if called reentrantly for a value
    ///   the producer has not reached yet
    /// - [`StreamError::Unbound`] if the producer was never bound
    /// - any error the producer itself reports
    pub fn value(&self, index: usize) -> StreamResult<T> {
        loop {
            let next = {
                let cache = self.cache.borrow();
                if let Some(value) = cache.get(index) {
                    return Ok(value.clone());
                }
                cache.len()
            };

            let mut producer = match self.slot.replace(Slot::Running) {
                Slot::Ready(producer) => producer,
                Slot::Running => {
                    debug!(index, produced = next, "unguarded recursion in memoized sequence");
                    return Err(StreamError::UnguardedRecursion { index });
                }
                Slot::Unbound => {
                    self.slot.replace(Slot::Unbound);
                    debug!(index, "read from unbound deferred sequence");
                    return Err(StreamError::Unbound);
                }
                Slot::Finished => {
                    self.slot.replace(Slot::Finished);
                    return Err(StreamError::Exhausted { index });
                }
                Slot::Failed(err) => {
                    self.slot.replace(Slot::Failed(err.clone()));
                    return Err(err);
                }
            };

            match producer.produce(next) {
                Ok(Some(value)) => {
                    self.cache.borrow_mut().push(value);
                    self.slot.replace(Slot::Ready(producer));
                }
                Ok(None) => {
                    self.slot.replace(Slot::Finished);
                    return Err(StreamError::Exhausted { index });
                }
                Err(err) => {
                    self.slot.replace(Slot::Failed(err.clone()));
                    return Err(err);
                }
            }
        }
    }

    /// Keeps `owner` alive for as long as this sequence lives.
    ///
    /// Retaining a sequence that (directly or not) retains this one forms an
    /// `Rc` cycle, and neither is ever freed.
    pub fn retain(&self, owner: Rc<dyn Any>) {
        self.retained.borrow_mut().push(owner);
    }

    /// Number of values produced so far.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns true once a producer is attached.
    pub fn is_bound(&self) -> bool {
        !matches!(*self.slot.borrow(), Slot::Unbound)
    }
}

impl<T> fmt::Debug for MemoizedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.slot.borrow() {
            Slot::Unbound => "unbound",
            Slot::Ready(_) => "ready",
            Slot::Running => "running",
            Slot::Finished => "finished",
            Slot::Failed(_) => "failed",
        };
        f.debug_struct("MemoizedSequence")
            .field("cached", &self.cache.borrow().len())
            .field("state", &state)
            .field("retained", &self.retained.borrow().len())
            .finish()
    }
}
