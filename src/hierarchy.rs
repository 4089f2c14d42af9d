//! Lazy traversal of self-referential chains
//!
//! [`walk`] turns "a start value plus a step function" into an iterator that
//! computes each element only when it is pulled. Error `source()` chains are
//! the main customer, see [`collect_messages`].

use std::error::Error;
use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::instrument;

/// Iterator returned by [`walk`].
///
/// Cloning a `Walk` snapshots its cursor; the clone replays the rest of the
/// chain independently of the original.
#[derive(Debug, Clone)]
pub struct Walk<T, N, C> {
    current: Option<T>,
    started: bool,
    step: N,
    keep_going: C,
}

/// Walks the chain `start, step(start), step(step(start)), ...` for as long
/// as `keep_going` accepts the current element.
///
/// The predicate is checked before an element is yielded, so a rejected
/// `start` produces an empty sequence. `step` runs only when the element it
/// produces is requested.
///
/// ```
/// use extkit::hierarchy::walk;
///
/// let v: Vec<i32> = walk(1, |n| n + 1, |n| *n < 5).collect();
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub fn walk<T, N, C>(start: T, step: N, keep_going: C) -> Walk<T, N, C>
where
    T: Clone,
    N: FnMut(&T) -> T,
    C: FnMut(&T) -> bool,
{
    Walk {
        current: Some(start),
        started: false,
        step,
        keep_going,
    }
}

impl<T, N, C> Iterator for Walk<T, N, C>
where
    T: Clone,
    N: FnMut(&T) -> T,
    C: FnMut(&T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut current = self.current.take()?;
        if self.started {
            current = (self.step)(&current);
        }
        if !(self.keep_going)(&current) {
            return None;
        }
        self.started = true;
        self.current = Some(current.clone());
        Some(current)
    }
}

impl<T, N, C> FusedIterator for Walk<T, N, C>
where
    T: Clone,
    N: FnMut(&T) -> T,
    C: FnMut(&T) -> bool,
{
}

/// Walks a chain that ends when `step` returns `None`.
pub fn walk_some<T, N>(start: Option<T>, mut step: N) -> impl Iterator<Item = T>
where
    T: Clone,
    N: FnMut(&T) -> Option<T>,
{
    walk(
        start,
        move |current: &Option<T>| current.as_ref().and_then(&mut step),
        Option::is_some,
    )
    .flatten()
}

/// Method-call form of [`walk`] and [`walk_some`].
pub trait HierarchyExt: Clone {
    fn hierarchy<N, C>(self, step: N, keep_going: C) -> Walk<Self, N, C>
    where
        N: FnMut(&Self) -> Self,
        C: FnMut(&Self) -> bool,
    {
        walk(self, step, keep_going)
    }

    fn hierarchy_some<N>(self, step: N) -> impl Iterator<Item = Self>
    where
        N: FnMut(&Self) -> Option<Self>,
    {
        walk_some(Some(self), step)
    }
}

impl<T: Clone> HierarchyExt for T {}

/// `err` followed by each error in its `source()` chain.
pub fn error_chain<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    walk_some(Some(err), |e: &&'a (dyn Error + 'static)| (*e).source())
}

/// Display text of every error in the chain, one per line, outermost first.
pub fn collect_messages(err: &(dyn Error + 'static)) -> String {
    join_messages(err, "\n")
}

#[instrument(level = "trace", skip(err))]
pub fn join_messages(err: &(dyn Error + 'static), separator: &str) -> String {
    error_chain(err).map(|e| e.to_string()).join(separator)
}

pub trait ErrorChainExt {
    fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)>;
    fn all_messages(&self) -> String;
}

impl<E: Error + 'static> ErrorChainExt for E {
    fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        error_chain(self)
    }

    fn all_messages(&self) -> String {
        collect_messages(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_rejected_start_yields_nothing() {
        let mut it = walk(10, |n| n + 1, |n| *n < 5);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_step_runs_only_on_demand() {
        let calls = Cell::new(0);
        let mut it = walk(
            0u32,
            |n| {
                calls.set(calls.get() + 1);
                n + 1
            },
            |_| true,
        );

        assert_eq!(it.next(), Some(0));
        assert_eq!(calls.get(), 0);
        assert_eq!(it.next(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clone_restarts_from_cursor() {
        let mut it = walk(1, |n| n * 2, |n| *n < 100);
        it.next();
        let saved = it.clone();
        let rest: Vec<_> = it.collect();
        let replay: Vec<_> = saved.collect();
        assert_eq!(rest, [2, 4, 8, 16, 32, 64]);
        assert_eq!(rest, replay);
    }

    #[test]
    fn test_infinite_chain_is_lazy() {
        let firsts: Vec<u64> = walk(1u64, |n| n * 3, |_| true).take(4).collect();
        assert_eq!(firsts, [1, 3, 9, 27]);
    }

    #[test]
    fn test_walk_some_stops_on_none() {
        let v: Vec<u8> = walk_some(Some(3u8), |n| n.checked_sub(1)).collect();
        assert_eq!(v, [3, 2, 1, 0]);
        assert_eq!(walk_some(None::<u8>, |n| Some(*n)).count(), 0);
    }

    #[test]
    fn test_error_chain_single_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        assert_eq!(collect_messages(&err), "disk gone");
    }
}
