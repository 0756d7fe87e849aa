//! Enumeration of pairs and triples drawn from infinite streams.
//!
//! Each enumeration is the head element followed by the interleaving of a
//! row with the recursive enumeration over the tails. The recursive part is
//! built on demand, so constructing an enumeration is O(1) and reaching its
//! k-th element nests only O(log k) levels deep.

use rivulet_core::Stream;

use crate::combinators::interleave;
use crate::ops::map;

/// Every `(s[i], t[j])` with `i <= j`, each exactly once.
pub fn pairs<A, B>(s: &Stream<A>, t: &Stream<B>) -> Stream<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let s = s.copy();
    let t = t.copy();
    Stream::defer(move || {
        let first = s.peek()?;
        let row = map(&t.tail(), {
            let first = first.clone();
            move |y| (first.clone(), y)
        });
        let rest = pairs(&s.tail(), &t.tail());
        Ok(Stream::cons((first, t.peek()?), &interleave(&row, &rest)))
    })
}

/// Every `(s[i], t[j])`, each exactly once.
pub fn all_pairs<A, B>(s: &Stream<A>, t: &Stream<B>) -> Stream<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let s = s.copy();
    let t = t.copy();
    Stream::defer(move || {
        let first_s = s.peek()?;
        let first_t = t.peek()?;
        let row = map(&t.tail(), {
            let first_s = first_s.clone();
            move |y| (first_s.clone(), y)
        });
        let column = map(&s.tail(), {
            let first_t = first_t.clone();
            move |x| (x, first_t.clone())
        });
        let rest = all_pairs(&s.tail(), &t.tail());
        Ok(Stream::cons(
            (first_s, first_t),
            &interleave(&row, &interleave(&column, &rest)),
        ))
    })
}

/// Every `(s[i], t[j], u[k])` with `i <= j <= k`, each exactly once.
pub fn triples<A, B, C>(s: &Stream<A>, t: &Stream<B>, u: &Stream<C>) -> Stream<(A, B, C)>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: Clone + 'static,
{
    let s = s.copy();
    let t = t.copy();
    let u = u.copy();
    Stream::defer(move || {
        let first = s.peek()?;
        let tail_pairs = pairs(&t, &u).tail();
        let row = map(&tail_pairs, {
            let first = first.clone();
            move |(y, z)| (first.clone(), y, z)
        });
        let rest = triples(&s.tail(), &t.tail(), &u.tail());
        Ok(Stream::cons(
            (first, t.peek()?, u.peek()?),
            &interleave(&row, &rest),
        ))
    })
}
