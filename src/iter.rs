//! Single-pass pull iterators.
//!
//! [`ExternalIterator`] is the capability set a source has to provide: produce the next
//! element and release whatever the source owns. Stepping over several elements and
//! counting what is left are derived from those two.
//!
//! [`FnIterator`] builds a source out of an opaque state value and two closures, and
//! [`IterSource`] turns any standard iterator into a source.

use core::iter::FusedIterator;

use log::trace;

/// A pull iterator with an explicit release step.
pub trait ExternalIterator {
    type Item;

    /// Produces the next element, or `None` once the source is exhausted.
    ///
    /// Calling `advance` again after it returned `None` keeps returning `None`.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Releases whatever the source owns. Further calls to `advance` return `None`.
    fn release(&mut self) {}

    /// Advances at most `n` times, stopping early at the end of the source.
    ///
    /// Returns the number of elements actually stepped over, `min(n, remaining)`.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut advanced = 0;
        while advanced < n {
            if self.advance().is_none() {
                break;
            }
            advanced += 1;
        }
        advanced
    }

    /// Advances until the end of the source and returns how many elements were left.
    fn count_remaining(&mut self) -> usize {
        let mut count = 0;
        while self.advance().is_some() {
            count += 1;
        }
        count
    }
}

impl<E: ExternalIterator + ?Sized> ExternalIterator for Box<E> {
    type Item = E::Item;

    #[inline(always)]
    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }

    fn release(&mut self) {
        (**self).release();
    }

    fn advance_by(&mut self, n: usize) -> usize {
        (**self).advance_by(n)
    }

    fn count_remaining(&mut self) -> usize {
        (**self).count_remaining()
    }
}

impl<E: ExternalIterator + ?Sized> ExternalIterator for &mut E {
    type Item = E::Item;

    #[inline(always)]
    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }

    fn release(&mut self) {
        (**self).release();
    }
}

/// An iterator assembled from a state value, an advance closure and a release closure.
///
/// The release closure receives the state by value and runs at most once: either on an
/// explicit [`release`](ExternalIterator::release) or when the iterator is dropped.
pub struct FnIterator<S, A, R>
where
    R: FnOnce(S),
{
    state: Option<S>,
    advance: A,
    release: Option<R>,
    exhausted: bool,
}

impl<S, A, R> FnIterator<S, A, R>
where
    R: FnOnce(S),
{
    /// Creates an iterator over `state` driven by `advance` and torn down by `release`.
    pub fn new(state: S, advance: A, release: R) -> Self {
        Self {
            state: Some(state),
            advance,
            release: Some(release),
            exhausted: false,
        }
    }

    /// Heap-allocated counterpart of [`new`](FnIterator::new).
    pub fn boxed(state: S, advance: A, release: R) -> Box<Self> {
        Box::new(Self::new(state, advance, release))
    }

    /// Returns `true` once the release closure has run.
    #[inline(always)]
    pub fn is_released(&self) -> bool {
        self.state.is_none()
    }

    /// Shared access to the state, `None` after release.
    pub fn state(&self) -> Option<&S> {
        self.state.as_ref()
    }

    fn release_state(&mut self) {
        if let (Some(state), Some(release)) = (self.state.take(), self.release.take()) {
            trace!("releasing iterator state");
            release(state);
        }
    }
}

impl<S, T, A, R> ExternalIterator for FnIterator<S, A, R>
where
    A: FnMut(&mut S) -> Option<T>,
    R: FnOnce(S),
{
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let state = self.state.as_mut()?;
        let next = (self.advance)(state);
        if next.is_none() {
            self.exhausted = true;
        }
        next
    }

    fn release(&mut self) {
        self.release_state();
    }
}

impl<S, A, R> Drop for FnIterator<S, A, R>
where
    R: FnOnce(S),
{
    fn drop(&mut self) {
        self.release_state();
    }
}

impl<S, T, A, R> Iterator for FnIterator<S, A, R>
where
    A: FnMut(&mut S) -> Option<T>,
    R: FnOnce(S),
{
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<T> {
        ExternalIterator::advance(self)
    }
}

impl<S, T, A, R> FusedIterator for FnIterator<S, A, R>
where
    A: FnMut(&mut S) -> Option<T>,
    R: FnOnce(S),
{
}

/// Adapts a standard iterator into an [`ExternalIterator`].
///
/// Exhaustion is sticky even if the wrapped iterator would resume, and releasing
/// drops the wrapped iterator together with anything it still owns.
pub struct IterSource<I> {
    inner: Option<I>,
}

impl<I: Iterator> IterSource<I> {
    /// Wraps anything that converts into an iterator.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: Some(source.into_iter()),
        }
    }
}

impl<I: Iterator> ExternalIterator for IterSource<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Option<I::Item> {
        let next = self.inner.as_mut()?.next();
        if next.is_none() {
            self.inner = None;
        }
        next
    }

    fn release(&mut self) {
        self.inner = None;
    }
}

impl<I: Iterator> Iterator for IterSource<I> {
    type Item = I::Item;

    #[inline(always)]
    fn next(&mut self) -> Option<I::Item> {
        ExternalIterator::advance(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<I: Iterator> FusedIterator for IterSource<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_source(
        values: Vec<i32>,
        releases: Rc<Cell<usize>>,
    ) -> FnIterator<
        (Vec<i32>, usize),
        impl FnMut(&mut (Vec<i32>, usize)) -> Option<i32>,
        impl FnOnce((Vec<i32>, usize)),
    > {
        FnIterator::new(
            (values, 0),
            |(values, pos): &mut (Vec<i32>, usize)| {
                let next = values.get(*pos).copied();
                *pos += 1;
                next
            },
            move |_| releases.set(releases.get() + 1),
        )
    }

    #[test]
    fn test_iter_advance_in_order() {
        let releases = Rc::new(Cell::new(0));
        let mut it = counting_source(vec![1, 2], releases.clone());
        assert_eq!(it.advance(), Some(1));
        assert_eq!(it.advance(), Some(2));
        assert_eq!(it.advance(), None);
        assert_eq!(it.advance(), None);
    }

    #[test]
    fn test_iter_exhaustion_is_sticky() {
        let mut flip = false;
        let mut it = FnIterator::new(
            (),
            move |_: &mut ()| {
                flip = !flip;
                if flip { None } else { Some(1) }
            },
            |_| {},
        );
        assert_eq!(it.advance(), None);
        assert_eq!(it.advance(), None);
    }

    #[test]
    fn test_iter_advance_by_stops_at_end() {
        let releases = Rc::new(Cell::new(0));
        let mut it = counting_source(vec![1, 2, 3, 4], releases.clone());
        assert_eq!(ExternalIterator::advance_by(&mut it, 0), 0);
        assert_eq!(ExternalIterator::advance_by(&mut it, 3), 3);
        assert_eq!(ExternalIterator::advance_by(&mut it, 3), 1);
        assert_eq!(ExternalIterator::advance_by(&mut it, 3), 0);
    }

    #[test]
    fn test_iter_count_remaining_consumes() {
        let releases = Rc::new(Cell::new(0));
        let mut it = counting_source(vec![5, 6, 7], releases.clone());
        assert_eq!(it.advance(), Some(5));
        assert_eq!(it.count_remaining(), 2);
        assert_eq!(it.count_remaining(), 0);
    }

    #[test]
    fn test_iter_release_runs_once() {
        let releases = Rc::new(Cell::new(0));
        let mut it = counting_source(vec![1], releases.clone());
        assert!(!it.is_released());
        it.release();
        assert!(it.is_released());
        assert_eq!(releases.get(), 1);
        assert_eq!(it.advance(), None);
        it.release();
        drop(it);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_iter_drop_releases() {
        let releases = Rc::new(Cell::new(0));
        {
            let mut it = counting_source(vec![1, 2], releases.clone());
            assert_eq!(it.advance(), Some(1));
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_iter_boxed_dyn_dispatch() {
        let releases = Rc::new(Cell::new(0));
        let mut it: Box<dyn ExternalIterator<Item = i32>> =
            Box::new(counting_source(vec![1, 2, 3], releases.clone()));
        assert_eq!(it.advance(), Some(1));
        assert_eq!(it.advance_by(10), 2);
        it.release();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_iter_boxed_constructor_exposes_state() {
        let it = FnIterator::boxed(41, |n: &mut i32| Some(*n + 1), |_| {});
        assert_eq!(it.state(), Some(&41));
    }

    #[test]
    fn test_iter_source_over_std_iterator() {
        let mut src = IterSource::new(vec![10, 20, 30]);
        assert_eq!(src.advance(), Some(10));
        assert_eq!(src.count_remaining(), 2);
        assert_eq!(src.advance(), None);

        let mut released = IterSource::new(0..100);
        assert_eq!(ExternalIterator::advance_by(&mut released, 5), 5);
        released.release();
        assert_eq!(released.advance(), None);
    }

    #[test]
    fn test_iter_by_mut_reference() {
        fn skip_two<E: ExternalIterator>(mut it: E) -> usize {
            it.advance_by(2)
        }

        let mut src = IterSource::new("abc".chars());
        assert_eq!(skip_two(&mut src), 2);
        assert_eq!(src.advance(), Some('c'));
    }

    // ─── std::iter::Iterator ───

    #[test]
    fn test_iter_std_iterator_fn_iterator_collect() {
        let releases = Rc::new(Cell::new(0));
        let mut it = counting_source(vec![1, 2, 3], releases.clone());
        assert_eq!(it.advance(), Some(1));
        let rest: Vec<i32> = it.by_ref().collect();
        assert_eq!(rest, vec![2, 3]);
        assert_eq!(it.next(), None);
        assert_eq!(releases.get(), 0);
        drop(it);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_iter_std_iterator_source_collect() {
        let src = IterSource::new(vec![4, 5, 6]);
        assert_eq!(src.size_hint(), (3, Some(3)));
        let doubled: Vec<i32> = src.map(|n| n * 2).collect();
        assert_eq!(doubled, vec![8, 10, 12]);

        let mut released = IterSource::new(0..10);
        released.release();
        assert_eq!(released.size_hint(), (0, Some(0)));
        assert_eq!(released.next(), None);
    }
}
