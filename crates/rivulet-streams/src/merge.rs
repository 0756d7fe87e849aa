//! Ordered union of sorted streams.
//!
//! Inputs must be strictly increasing. The output is then strictly
//! increasing too: a value present in several inputs is emitted once and
//! every stream holding it advances. Unsorted input is not detected; the
//! output for it is unspecified.

use rivulet_core::Stream;

/// Merges two strictly increasing streams.
pub fn merge<T>(a: &Stream<T>, b: &Stream<T>) -> Stream<T>
where
    T: PartialOrd + Clone + 'static,
{
    merge_all(&[a.copy(), b.copy()])
}

/// Merges any number of strictly increasing streams.
///
/// Finite inputs drop out as they end; the result ends when all have.
pub fn merge_all<T>(streams: &[Stream<T>]) -> Stream<T>
where
    T: PartialOrd + Clone + 'static,
{
    let mut cursors: Vec<Stream<T>> = streams.iter().map(Stream::copy).collect();
    Stream::from_fn(move |_| {
        let mut smallest: Option<T> = None;
        for cursor in &cursors {
            if let Some(head) = cursor.try_peek()? {
                if smallest.as_ref().map_or(true, |current| head < *current) {
                    smallest = Some(head);
                }
            }
        }

        let Some(smallest) = smallest else {
            return Ok(None);
        };
        for cursor in &mut cursors {
            if cursor.try_peek()?.as_ref() == Some(&smallest) {
                cursor.advance()?;
            }
        }
        Ok(Some(smallest))
    })
}
