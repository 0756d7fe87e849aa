//! Two-phase construction of self-referential streams.

use std::fmt;
use std::rc::Rc;

use crate::error::{StreamError, StreamResult};
use crate::memo::{MemoizedSequence, Producer};
use crate::stream::Stream;

/// A stream that can be referenced before it is defined.
///
/// Hand out [`Deferred::stream`] views while building the definition, then
/// consume the slot with [`Deferred::bind`]. The views are weak, so a
/// definition that refers to itself does not leak.
///
/// ```
/// use rivulet_core::{Deferred, Stream};
///
/// let slot = Deferred::new();
/// let view = slot.stream();
/// let ones = slot.bind(Stream::cons(1u8, &view));
/// assert_eq!(ones.prefix(3).unwrap(), vec![1, 1, 1]);
/// ```
///
/// ## Mutual recursion
///
/// A weak view of a *different* slot does not keep that partner alive. When
/// a definition reads a partner, let one side own the other with
/// [`Deferred::bind_owning`] (or [`Deferred::keep_alive`]) and bind the
/// other side with a plain [`Deferred::bind`]. Owning in both directions
/// forms an `Rc` cycle that is never freed.
///
/// ```
/// use rivulet_core::{Deferred, Stream};
///
/// // evens = 0 :: (odds + 1), odds = evens + 1
/// let evens_slot = Deferred::new();
/// let odds_slot = Deferred::new();
/// let (mut odds_view, mut evens_view) = (odds_slot.stream(), evens_slot.stream());
///
/// let odds_of_evens = odds_view.clone();
/// let evens = evens_slot
///     .bind_owning(
///         Stream::cons(0u32, &Stream::from_fn(move |_| Ok(odds_view.pull()?.map(|v: u32| v + 1)))),
///         &[&odds_of_evens],
///     )
///     .unwrap();
/// let odds = odds_slot.bind(Stream::from_fn(move |_| Ok(evens_view.pull()?.map(|v: u32| v + 1))));
///
/// drop(odds);
/// assert_eq!(evens.prefix(4).unwrap(), vec![0, 2, 4, 6]);
/// ```
pub struct Deferred<T> {
    sequence: Rc<MemoizedSequence<T>>,
}

impl<T: Clone + 'static> Deferred<T> {
    /// Creates an unbound slot. Reading its views before binding reports
    /// [`crate::StreamError::Unbound`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequence: Rc::new(MemoizedSequence::unbound()),
        }
    }

    /// A weak view of the stream, positioned at index 0.
    #[must_use]
    pub fn stream(&self) -> Stream<T> {
        Stream::weak_view(&self.sequence)
    }

    /// Makes the bound stream keep `partner`'s sequence alive.
    ///
    /// # Errors
    ///
    /// [`StreamError::Detached`] if `partner` is a weak view whose sequence
    /// is already gone.
    pub fn keep_alive<U: Clone + 'static>(&self, partner: &Stream<U>) -> StreamResult<()> {
        let sequence = partner.sequence().ok_or(StreamError::Detached)?;
        self.sequence.retain(sequence);
        Ok(())
    }

    /// [`Deferred::bind`], keeping every partner's sequence alive for as long
    /// as the returned stream lives.
    ///
    /// # Errors
    ///
    /// See [`Deferred::keep_alive`].
    pub fn bind_owning(
        self,
        definition: Stream<T>,
        partners: &[&Stream<T>],
    ) -> StreamResult<Stream<T>> {
        for partner in partners {
            self.keep_alive(*partner)?;
        }
        Ok(self.bind(definition))
    }

    /// Defines the stream as the values of `definition` and returns the
    /// owning handle.
    pub fn bind(self, definition: Stream<T>) -> Stream<T> {
        let mut definition = definition;
        self.bind_with(move |_: usize| definition.pull())
    }

    /// Defines the stream by a producer and returns the owning handle.
    pub fn bind_with(self, producer: impl Producer<T> + 'static) -> Stream<T> {
        // The slot is consumed here, so it cannot be bound twice
        let bound = self.sequence.bind(Box::new(producer));
        debug_assert!(bound);
        Stream::from_sequence(self.sequence)
    }
}

impl<T: Clone + 'static> Default for Deferred<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Deferred").field(&self.sequence).finish()
    }
}
