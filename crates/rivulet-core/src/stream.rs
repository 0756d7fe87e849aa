//! Stream cursors over memoized sequences.
//!
//! A [`Stream`] is a link to a shared [`MemoizedSequence`] plus a private
//! read position. Cloning a stream (or calling [`Stream::copy`]) snapshots
//! the position; advancing one cursor never moves another, and every cursor
//! reads the same cached values.
//!
//! Links are either strong or weak. Self-referential definitions receive a
//! weak view of the stream being defined, so the definition never keeps its
//! own sequence alive; reading through a weak view after the sequence was
//! dropped reports [`StreamError::Detached`].

use std::fmt;
use std::rc::{Rc, Weak};

use crate::deferred::Deferred;
use crate::error::{StreamError, StreamResult};
use crate::memo::{MemoizedSequence, Producer};

enum Link<T> {
    Strong(Rc<MemoizedSequence<T>>),
    Weak(Weak<MemoizedSequence<T>>),
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        match self {
            Link::Strong(sequence) => Link::Strong(Rc::clone(sequence)),
            Link::Weak(sequence) => Link::Weak(Weak::clone(sequence)),
        }
    }
}

/// An independent cursor over a shared, memoized, conceptually infinite sequence.
pub struct Stream<T> {
    link: Link<T>,
    position: usize,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            link: self.link.clone(),
            position: self.position,
        }
    }
}

/// Converts the end-of-data signal into `None`, keeping every other error.
fn optional<T>(result: StreamResult<T>) -> StreamResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(StreamError::Exhausted { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

impl<T> Stream<T> {
    pub(crate) fn from_sequence(sequence: Rc<MemoizedSequence<T>>) -> Self {
        Self {
            link: Link::Strong(sequence),
            position: 0,
        }
    }

    pub(crate) fn weak_view(sequence: &Rc<MemoizedSequence<T>>) -> Self {
        Self {
            link: Link::Weak(Rc::downgrade(sequence)),
            position: 0,
        }
    }

    /// The index the next [`Stream::advance`] will return.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// A new cursor over the same sequence, starting at index 0.
    #[must_use]
    pub fn rewind(&self) -> Self {
        Self {
            link: self.link.clone(),
            position: 0,
        }
    }

    /// A new cursor at this cursor's current position.
    ///
    /// The copy is a snapshot: advancing either cursor leaves the other alone.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// A new cursor one position ahead of this one.
    #[must_use]
    pub fn tail(&self) -> Self {
        self.skip(1)
    }

    /// A new cursor `n` positions ahead of this one.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        Self {
            link: self.link.clone(),
            position: self.position + n,
        }
    }

    /// A weak view of the same sequence at the same position.
    #[must_use]
    pub fn downgrade(&self) -> Self {
        let link = match &self.link {
            Link::Strong(sequence) => Link::Weak(Rc::downgrade(sequence)),
            Link::Weak(sequence) => Link::Weak(Weak::clone(sequence)),
        };
        Self {
            link,
            position: self.position,
        }
    }

    /// Returns true if this cursor does not keep its sequence alive.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        matches!(self.link, Link::Weak(_))
    }

    /// The shared sequence, or `None` if this weak view outlived it.
    pub(crate) fn sequence(&self) -> Option<Rc<MemoizedSequence<T>>> {
        match &self.link {
            Link::Strong(sequence) => Some(Rc::clone(sequence)),
            Link::Weak(sequence) => sequence.upgrade(),
        }
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// Creates a stream driven by an arbitrary [`Producer`].
    pub fn from_producer(producer: impl Producer<T> + 'static) -> Self {
        Self::from_sequence(Rc::new(MemoizedSequence::new(producer)))
    }

    /// Creates a stream from a fallible producer closure.
    ///
    /// The closure is called with `0, 1, 2, ...`, once per index, only when a
    /// value is demanded. `Ok(None)` ends the stream.
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: FnMut(usize) -> StreamResult<Option<T>> + 'static,
    {
        Self::from_producer(producer)
    }

    /// Creates an infinite stream whose i-th value is `f(i)`.
    pub fn generate<F>(mut f: F) -> Self
    where
        F: FnMut(usize) -> T + 'static,
    {
        Self::from_fn(move |index| Ok(Some(f(index))))
    }

    /// Creates a stream that lazily drains an iterator.
    pub fn from_iterator<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let mut iter = values.into_iter();
        Self::from_fn(move |_| Ok(iter.next()))
    }

    /// Creates a finite stream over the given values.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_iterator(values)
    }

    /// The stream with no values.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_fn(|_| Ok(None))
    }

    /// `value, value, value, ...`
    pub fn repeat(value: T) -> Self {
        Self::generate(move |_| value.clone())
    }

    /// `seed, step(seed), step(step(seed)), ...`
    pub fn iterate<F>(seed: T, mut step: F) -> Self
    where
        F: FnMut(&T) -> T + 'static,
    {
        let mut previous: Option<T> = None;
        Self::from_fn(move |_| {
            let next = match previous.take() {
                Some(value) => step(&value),
                None => seed.clone(),
            };
            previous = Some(next.clone());
            Ok(Some(next))
        })
    }

    /// `head` followed by the values of `tail` from its current position.
    pub fn cons(head: T, tail: &Stream<T>) -> Self {
        Self::prepend(vec![head], tail)
    }

    /// `values` followed by the values of `tail` from its current position.
    ///
    /// `tail` is not read until every prepended value has been delivered,
    /// which is what guards a self-referential tail.
    pub fn prepend(values: Vec<T>, tail: &Stream<T>) -> Self {
        let mut head = values.into_iter();
        let mut tail = tail.copy();
        Self::from_fn(move |_| match head.next() {
            Some(value) => Ok(Some(value)),
            None => tail.pull(),
        })
    }

    /// A stream whose definition is built on first demand.
    ///
    /// Used for definitions that would otherwise recurse while being
    /// constructed, e.g. `pairs` nesting a copy of itself. An `Exhausted`
    /// error from `build` yields an empty stream.
    pub fn defer<F>(build: F) -> Self
    where
        F: FnOnce() -> StreamResult<Stream<T>> + 'static,
    {
        let mut pending = Some(build);
        let mut definition: Option<Stream<T>> = None;
        Self::from_fn(move |_| {
            if definition.is_none() {
                let Some(build) = pending.take() else {
                    return Ok(None);
                };
                match build() {
                    Ok(stream) => definition = Some(stream),
                    Err(err) if err.is_exhausted() => return Ok(None),
                    Err(err) => return Err(err),
                }
            }
            match definition.as_mut() {
                Some(stream) => stream.pull(),
                None => Ok(None),
            }
        })
    }

    /// The fixed point of `define`.
    ///
    /// `define` receives a weak view of the stream being defined and returns
    /// its definition. The definition must be guarded: term `n` may only read
    /// terms before `n` of the view, otherwise evaluation reports
    /// [`StreamError::UnguardedRecursion`].
    ///
    /// ```
    /// use rivulet_core::Stream;
    ///
    /// // 0, 1, 2, 3, ...
    /// let naturals = Stream::recursive(|this| {
    ///     let mut previous = this.clone();
    ///     Stream::cons(0u32, &Stream::from_fn(move |_| Ok(previous.pull()?.map(|n: u32| n + 1))))
    /// });
    /// assert_eq!(naturals.prefix(4).unwrap(), vec![0, 1, 2, 3]);
    /// ```
    pub fn recursive<F>(define: F) -> Self
    where
        F: FnOnce(&Stream<T>) -> Stream<T>,
    {
        let slot = Deferred::new();
        let definition = define(&slot.stream());
        slot.bind(definition)
    }

    /// The value at absolute index `index`; the cursor does not move.
    ///
    /// # Errors
    ///
    /// Propagates the sequence's evaluation errors, or
    /// [`StreamError::Detached`] if this weak view outlived its sequence.
    pub fn nth(&self, index: usize) -> StreamResult<T> {
        match &self.link {
            Link::Strong(sequence) => sequence.value(index),
            Link::Weak(sequence) => sequence
                .upgrade()
                .ok_or(StreamError::Detached)?
                .value(index),
        }
    }

    /// The value `offset` places after the cursor; the cursor does not move.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn at(&self, offset: usize) -> StreamResult<T> {
        self.nth(self.position + offset)
    }

    /// Like [`Stream::at`], with end-of-data reported as `None`.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn try_at(&self, offset: usize) -> StreamResult<Option<T>> {
        optional(self.at(offset))
    }

    /// The value the next [`Stream::advance`] will return.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn peek(&self) -> StreamResult<T> {
        self.at(0)
    }

    /// Like [`Stream::peek`], with end-of-data reported as `None`.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn try_peek(&self) -> StreamResult<Option<T>> {
        self.try_at(0)
    }

    /// Returns the value at the cursor and moves the cursor forward.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`]. The cursor does not move on error.
    pub fn advance(&mut self) -> StreamResult<T> {
        let value = self.nth(self.position)?;
        self.position += 1;
        Ok(value)
    }

    /// Like [`Stream::advance`], with end-of-data reported as `None`.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn pull(&mut self) -> StreamResult<Option<T>> {
        optional(self.advance())
    }

    /// Advances `n` times and returns the values read.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn take(&mut self, n: usize) -> StreamResult<Vec<T>> {
        (0..n).map(|_| self.advance()).collect()
    }

    /// The next `n` values, without moving the cursor.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn prefix(&self, n: usize) -> StreamResult<Vec<T>> {
        self.copy().take(n)
    }

    /// The most recently returned value: index `max(position - 1, 0)`.
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn latest(&self) -> StreamResult<T> {
        self.nth(self.position.saturating_sub(1))
    }

    /// The value returned just before the most recent one: index
    /// `max(position - 2, 0)`.
    ///
    /// Before the cursor has advanced twice this clamps to index 0, so it can
    /// coincide with [`Stream::latest`].
    ///
    /// # Errors
    ///
    /// See [`Stream::nth`].
    pub fn second_latest(&self) -> StreamResult<T> {
        self.nth(self.position.saturating_sub(2))
    }

    /// Number of values the underlying sequence has produced so far.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        match &self.link {
            Link::Strong(sequence) => sequence.cached_len(),
            Link::Weak(sequence) => sequence.upgrade().map_or(0, |s| s.cached_len()),
        }
    }

    /// An iterator over the values from the cursor onwards.
    ///
    /// The iterator owns a copy of the cursor. It ends when the stream is
    /// exhausted and stops after yielding the first error.
    #[must_use]
    pub fn values(&self) -> Values<T> {
        Values {
            cursor: self.copy(),
            failed: false,
        }
    }
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("position", &self.position)
            .field("weak", &self.is_weak())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`Stream::values`].
pub struct Values<T> {
    cursor: Stream<T>,
    failed: bool,
}

impl<T: Clone + 'static> Iterator for Values<T> {
    type Item = StreamResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.cursor.pull().transpose();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter_from(start: i64) -> Stream<i64> {
        Stream::iterate(start, |n| n + 1)
    }

    #[test]
    fn test_counter_values() {
        let s = counter_from(7);
        for n in [0usize, 1, 5, 100] {
            assert_eq!(s.nth(n).unwrap(), 7 + n as i64);
        }
    }

    #[test]
    fn test_memoization_counts_producer_calls() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let s = Stream::generate(move |i| {
            counter.set(counter.get() + 1);
            i * 3
        });

        assert_eq!(s.nth(9).unwrap(), 27);
        assert_eq!(calls.get(), 10);
        assert_eq!(s.nth(9).unwrap(), 27);
        assert_eq!(s.rewind().nth(4).unwrap(), 12);
        assert_eq!(calls.get(), 10);
        assert_eq!(s.cached_len(), 10);
    }

    #[test]
    fn test_cursor_independence() {
        let mut s = counter_from(0);
        s.advance().unwrap();
        s.advance().unwrap();

        let mut a = s.copy();
        a.advance().unwrap();
        a.advance().unwrap();
        let mut b = s.copy();

        assert_eq!(b.advance().unwrap(), 2);
        assert_eq!(s.position(), 2);
        assert_eq!(a.position(), 4);
        assert_eq!(s.advance().unwrap(), 2);
    }

    #[test]
    fn test_nth_does_not_move_cursor() {
        let mut s = counter_from(10);
        assert_eq!(s.nth(5).unwrap(), 15);
        assert_eq!(s.position(), 0);
        assert_eq!(s.advance().unwrap(), 10);
        // nth is absolute, at is relative
        assert_eq!(s.nth(0).unwrap(), 10);
        assert_eq!(s.at(0).unwrap(), 11);
        assert_eq!(s.peek().unwrap(), 11);
    }

    #[test]
    fn test_rewind_tail_skip() {
        let mut s = counter_from(0);
        s.take(3).unwrap();
        assert_eq!(s.rewind().peek().unwrap(), 0);
        assert_eq!(s.tail().peek().unwrap(), 4);
        assert_eq!(s.skip(10).peek().unwrap(), 13);
        assert_eq!(s.position(), 3);
    }

    #[test]
    fn test_latest_and_second_latest() {
        let mut s = counter_from(100);

        // Nothing returned yet: both clamp to index 0
        assert_eq!(s.latest().unwrap(), 100);
        assert_eq!(s.second_latest().unwrap(), 100);

        s.advance().unwrap();
        assert_eq!(s.latest().unwrap(), 100);
        assert_eq!(s.second_latest().unwrap(), 100);

        s.advance().unwrap();
        assert_eq!(s.latest().unwrap(), 101);
        assert_eq!(s.second_latest().unwrap(), 100);

        s.advance().unwrap();
        assert_eq!(s.latest().unwrap(), 102);
        assert_eq!(s.second_latest().unwrap(), 101);
    }

    #[test]
    fn test_finite_streams() {
        let mut s = Stream::from_vec(vec!['a', 'b']);
        assert_eq!(s.advance().unwrap(), 'a');
        assert_eq!(s.pull().unwrap(), Some('b'));
        assert_eq!(s.pull().unwrap(), None);
        assert_eq!(s.advance(), Err(StreamError::Exhausted { index: 2 }));
        assert_eq!(s.position(), 2);
        assert!(Stream::<u8>::empty().try_peek().unwrap().is_none());
    }

    #[test]
    fn test_values_iterator() {
        let s = Stream::from_vec(vec![1, 2, 3]);
        let collected: StreamResult<Vec<i32>> = s.values().collect();
        assert_eq!(collected.unwrap(), vec![1, 2, 3]);

        let evens: Vec<i64> = counter_from(0)
            .values()
            .map(Result::unwrap)
            .filter(|n| n % 2 == 0)
            .take(3)
            .collect();
        assert_eq!(evens, vec![0, 2, 4]);
    }

    #[test]
    fn test_values_stops_after_error() {
        let s: Stream<i32> = Stream::from_fn(|i| {
            if i < 2 {
                Ok(Some(1))
            } else {
                Err(StreamError::DivisionByZero)
            }
        });
        let items: Vec<StreamResult<i32>> = s.values().collect();
        assert_eq!(items, vec![Ok(1), Ok(1), Err(StreamError::DivisionByZero)]);
    }

    #[test]
    fn test_cons_and_prepend() {
        let tail = counter_from(10);
        let s = Stream::prepend(vec![1, 2], &Stream::cons(3, &tail));
        assert_eq!(s.prefix(5).unwrap(), vec![1, 2, 3, 10, 11]);
    }

    #[test]
    fn test_cons_starts_from_tail_cursor() {
        let mut tail = counter_from(0);
        tail.take(5).unwrap();
        let s = Stream::cons(-1, &tail);
        assert_eq!(s.prefix(3).unwrap(), vec![-1, 5, 6]);
    }

    #[test]
    fn test_iterate() {
        let powers = Stream::iterate(1u64, |p| p * 3);
        assert_eq!(powers.prefix(5).unwrap(), vec![1, 3, 9, 27, 81]);
    }

    #[test]
    fn test_defer_builds_once_on_demand() {
        let builds = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&builds);
        let s = Stream::defer(move || {
            counter.set(counter.get() + 1);
            Ok(counter_from(5))
        });

        assert_eq!(builds.get(), 0);
        assert_eq!(s.nth(3).unwrap(), 8);
        assert_eq!(s.nth(10).unwrap(), 15);
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn test_recursive_fibonacci() {
        let fib = Stream::recursive(|fib: &Stream<u64>| {
            let a = fib.clone();
            let b = fib.tail();
            let sums = Stream::from_fn(move |i| Ok(Some(a.nth(i)? + b.at(i)?)));
            Stream::prepend(vec![0u64, 1], &sums)
        });

        assert_eq!(
            fib.prefix(10).unwrap(),
            vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]
        );
        // Deep index without deep recursion
        assert_eq!(fib.nth(90).unwrap(), 2_880_067_194_370_816_120);
    }

    #[test]
    fn test_unguarded_recursion_is_reported() {
        // x = x + 1 reads the term it is producing
        let x: Stream<i32> = Stream::recursive(|this| {
            let mut same = this.clone();
            Stream::from_fn(move |_| Ok(same.pull()?.map(|v: i32| v + 1)))
        });

        assert_eq!(x.nth(0), Err(StreamError::UnguardedRecursion { index: 0 }));
        // The failure is sticky
        assert_eq!(x.nth(0), Err(StreamError::UnguardedRecursion { index: 0 }));
    }

    #[test]
    fn test_self_reference_does_not_keep_itself_alive() {
        let ones = Stream::recursive(|this| Stream::cons(1u8, this));
        let view = ones.downgrade();
        assert!(view.is_weak());
        assert!(!ones.is_weak());
        assert_eq!(view.nth(3).unwrap(), 1);

        drop(ones);
        assert_eq!(view.nth(0), Err(StreamError::Detached));
    }

    #[test]
    fn test_long_streams_do_not_grow_the_stack() {
        let naturals = Stream::recursive(|this| {
            let mut previous = this.clone();
            Stream::cons(0u64, &Stream::from_fn(move |_| Ok(previous.pull()?.map(|n: u64| n + 1))))
        });
        assert_eq!(naturals.nth(200_000).unwrap(), 200_000);
    }
}
