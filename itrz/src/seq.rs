use std::{fmt, hash::Hash, ops::ControlFlow, rc::Rc};

use itrz_fn::{Consumer, Factory, Function, Predicate};
use itrz_maybe::Maybe;

use crate::{combinator, pull::Pull, sink::Sink, source};

pub(crate) type Cursor<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// The machinery behind a [`Seq`].
///
/// A producer can be driven in two ways: pushing every element into a sink
/// until the sink breaks, or handing out a pull cursor. Both start a fresh
/// traversal from the beginning every time they are called.
pub(crate) trait Producer<'a, T> {
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()>;

    fn cursor(&self) -> Cursor<'a, T>;
}

/// A lazy sequence of elements.
///
/// A `Seq` describes a computation rather than holding elements. Nothing
/// happens until it is driven, and every traversal starts again from the
/// beginning, so a `Seq` can be consumed any number of times. Cloning is
/// cheap.
///
/// Sequences may be infinite (see [`Seq::generate`]). Eager operations such
/// as [`Seq::count`] never return on an infinite sequence; bound it with
/// [`Seq::limit`] first.
pub struct Seq<'a, T> {
    producer: Rc<dyn Producer<'a, T> + 'a>,
}

impl<'a, T: 'a> Seq<'a, T> {
    pub(crate) fn from_producer(producer: impl Producer<'a, T> + 'a) -> Self {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// A sequence over a fresh iterator created by `make` for each
    /// traversal.
    pub fn from_iter_fn<I>(make: impl Fn() -> I + 'a) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::from_producer(source::FromIterFn::new(make))
    }

    /// A sequence over the elements of a collection, in its order.
    ///
    /// The collection is cloned at the start of each traversal, so pass a
    /// reference (`&v`) to avoid copying a large owned collection.
    pub fn all<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T> + Clone + 'a,
        C::IntoIter: 'a,
    {
        Self::from_iter_fn(move || collection.clone())
    }

    pub fn of<const N: usize>(elements: [T; N]) -> Self
    where
        T: Clone,
    {
        Self::all(elements)
    }

    pub fn empty() -> Self {
        Self::from_iter_fn(std::iter::empty)
    }

    /// An infinite sequence calling `factory` for every element.
    ///
    /// Values are never cached: each element, in each traversal, is a new
    /// call.
    pub fn generate(factory: impl Factory<T> + 'a) -> Self {
        Self::from_producer(source::Generate::new(factory))
    }

    /// An infinite sequence of `step(seed)`, `step(step(seed))` and so on.
    pub fn iterate(seed: T, step: impl Fn(&T) -> T + 'a) -> Self
    where
        T: Clone,
    {
        Self::from_producer(source::Iterate::new(seed, step))
    }

    /// Push every element into `sink` until it breaks.
    ///
    /// Returns `Break` if the sink stopped the traversal.
    pub fn traverse(&self, mut sink: impl FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.producer.traverse(&mut sink)
    }

    /// Open a pull cursor on a new traversal.
    pub fn pull(&self) -> Pull<'a, T> {
        Pull::new(self.producer.cursor())
    }

    pub(crate) fn cursor(&self) -> Cursor<'a, T> {
        self.producer.cursor()
    }

    /// This sequence followed by `other`.
    pub fn chain(self, other: Self) -> Self {
        concat([self, other])
    }

    /// Only the elements matching `predicate`.
    pub fn filter(self, predicate: impl Predicate<T> + 'a) -> Self {
        Self::from_producer(combinator::Filter::new(self, predicate))
    }

    pub fn map<B: 'a>(self, f: impl Function<T, B> + 'a) -> Seq<'a, B> {
        Seq::from_producer(combinator::Map::new(self, f))
    }

    /// Replace every element by the elements of the sequence `f` makes of it.
    pub fn flat_map<B: 'a>(self, f: impl Function<T, Seq<'a, B>> + 'a) -> Seq<'a, B> {
        Seq::from_producer(combinator::FlatMap::new(self, f))
    }

    /// Call `consumer` on each element just before it is passed on.
    pub fn peek(self, consumer: impl FnMut(&T) + 'a) -> Self {
        Self::from_producer(combinator::Peek::new(self, consumer))
    }

    /// At most the first `count` elements.
    ///
    /// The source is stopped once `count` elements are through, so this is
    /// safe on infinite sequences.
    pub fn limit(self, count: usize) -> Self {
        Self::from_producer(combinator::Limit::new(self, count))
    }

    /// Everything after the first `count` elements.
    pub fn skip(self, count: usize) -> Self {
        Self::from_producer(combinator::Skip::new(self, count))
    }

    /// The first occurrence of each element.
    ///
    /// Elements seen are remembered per traversal.
    pub fn distinct(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        Self::from_producer(combinator::Distinct::new(self))
    }

    /// Whether every element matches. True for an empty sequence.
    pub fn all_match(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.traverse(|item| {
            if predicate(&item) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// Whether any element matches. False for an empty sequence.
    pub fn any_match(&self, mut predicate: impl FnMut(&T) -> bool) -> bool {
        self.traverse(|item| {
            if predicate(&item) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// Whether no element matches. True for an empty sequence.
    pub fn none_match(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any_match(predicate)
    }

    pub fn count(&self) -> usize {
        let mut count = 0;
        let _ = self.traverse(|_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    pub fn for_each(&self, mut consumer: impl Consumer<T>) {
        let _ = self.traverse(|item| {
            consumer(item);
            ControlFlow::Continue(())
        });
    }

    /// Add every element to `sink`, in order.
    pub fn drain_to<S: Sink<T> + ?Sized>(&self, sink: &mut S) {
        self.for_each(|item| sink.add(item));
    }

    pub fn to_vec(&self) -> Vec<T> {
        let mut items = Vec::new();
        self.drain_to(&mut items);
        items
    }

    pub fn collect<C: FromIterator<T>>(&self) -> C {
        self.pull().collect()
    }

    /// Some element of the sequence, if there is one.
    ///
    /// At most one element is produced.
    pub fn find_any(&self) -> Maybe<T> {
        let mut cursor = self.pull();
        let found = cursor.next();
        cursor.stop();
        found.into()
    }

    /// Fold the elements from left to right.
    ///
    /// The combiner receives the element first and the accumulator second.
    pub fn reduce<B>(&self, identity: B, mut combiner: impl FnMut(T, B) -> B) -> B {
        self.pull().fold(identity, |acc, item| combiner(item, acc))
    }
}

/// All elements of each sequence in turn.
///
/// Once the consumer stops, later sequences are not touched.
pub fn concat<'a, T: 'a>(seqs: impl IntoIterator<Item = Seq<'a, T>>) -> Seq<'a, T> {
    Seq::from_producer(source::Concat::new(seqs.into_iter().collect()))
}

impl<T> Clone for Seq<'_, T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for Seq<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<'a, T: 'a> Default for Seq<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Seq<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::all(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T: 'a> IntoIterator for Seq<'a, T> {
    type Item = T;
    type IntoIter = Pull<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pull()
    }
}

impl<'a, T: 'a> IntoIterator for &Seq<'a, T> {
    type Item = T;
    type IntoIter = Pull<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pull()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::VecDeque};

    use insta::assert_snapshot;

    use super::*;

    fn equal_one(n: &i32) -> bool {
        *n == 1
    }

    fn is_odd(n: &i32) -> bool {
        n % 2 == 1
    }

    fn counted<'a>(seq: Seq<'a, i32>, counter: &'a Cell<usize>) -> Seq<'a, i32> {
        seq.peek(move |_| counter.set(counter.get() + 1))
    }

    #[test]
    fn test_all() {
        assert_eq!(Seq::all(Vec::<i32>::new()).count(), 0);
        assert_eq!(Seq::all(vec![1, 2, 3, 4]).count(), 4);
        let values = [5, 6];
        assert_eq!(Seq::all(&values).to_vec(), vec![&5, &6]);
        assert_eq!(Seq::all(1..4).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_of_and_empty() {
        assert_eq!(Seq::of([1]).count(), 1);
        assert_eq!(Seq::of([1, 2, 3, 4]).count(), 4);
        assert_eq!(Seq::<i32>::empty().count(), 0);
        assert_eq!(Seq::<i32>::default().to_vec(), Vec::<i32>::new());
    }

    #[test]
    fn test_all_match() {
        let cases: [(&[i32], bool); 3] = [(&[], true), (&[1, 1, 1], true), (&[1, 2, 3, 4], false)];
        for (values, expected) in cases {
            assert_eq!(Seq::all(values.to_vec()).all_match(equal_one), expected);
        }
    }

    #[test]
    fn test_any_match() {
        let cases: [(&[i32], bool); 4] = [
            (&[], false),
            (&[1, 1, 1], true),
            (&[1, 2, 3, 4], true),
            (&[2, 3, 4, 5], false),
        ];
        for (values, expected) in cases {
            assert_eq!(Seq::all(values.to_vec()).any_match(equal_one), expected);
        }
    }

    #[test]
    fn test_none_match() {
        let cases: [(&[i32], bool); 4] = [
            (&[], true),
            (&[1, 1, 1], false),
            (&[1, 2, 3, 4], false),
            (&[2, 3, 4, 5], true),
        ];
        for (values, expected) in cases {
            assert_eq!(Seq::all(values.to_vec()).none_match(equal_one), expected);
        }
    }

    #[test]
    fn test_matching_short_circuits() {
        let produced = Cell::new(0);
        let seq = counted(Seq::of([2, 1, 1, 1]), &produced);
        assert!(!seq.all_match(equal_one));
        assert_eq!(produced.get(), 1);

        produced.set(0);
        assert!(seq.any_match(equal_one));
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_concat() {
        let seq = concat([Seq::of([1, 2, 3]), Seq::of([4, 5, 6])]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(seq.pull().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(Seq::of([1]).chain(Seq::of([2])).to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_concat_does_not_touch_later_sequences_after_stop() {
        let touched = Cell::new(0);
        let seq = concat([Seq::of([1, 2]), counted(Seq::of([3, 4]), &touched)]);
        assert!(seq.any_match(|n| *n == 2));
        assert_eq!(touched.get(), 0);

        assert_eq!(seq.find_any(), Maybe::just(1));
        assert_eq!(touched.get(), 0);
    }

    #[test]
    fn test_concat_continues_after_limited_source() {
        let naturals = Seq::iterate(0, |n| n + 1);
        let seq = concat([naturals.limit(2), Seq::of([10, 11])]);
        assert_eq!(seq.to_vec(), vec![1, 2, 10, 11]);
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 10, 11]);
    }

    #[test]
    fn test_count() {
        assert_eq!(Seq::<i32>::empty().count(), 0);
        assert_eq!(Seq::of([1, 1, 1]).count(), 3);
    }

    #[test]
    fn test_distinct() {
        let cases: [(&[i32], &[i32]); 3] = [
            (&[], &[]),
            (&[1, 2, 3], &[1, 2, 3]),
            (&[1, 1, 2, 2, 4], &[1, 2, 4]),
        ];
        for (values, expected) in cases {
            let seq = Seq::all(values.to_vec()).distinct();
            assert_eq!(seq.to_vec(), expected);
            assert_eq!(seq.collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_distinct_forgets_between_traversals() {
        let seq = Seq::of([3, 1, 3, 2, 1]).distinct();
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);
        assert_eq!(seq.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn test_drain_to() {
        let mut v = Vec::new();
        Seq::of([1, 2, 3]).drain_to(&mut v);
        assert_eq!(v, vec![1, 2, 3]);

        let mut d = VecDeque::from([0]);
        Seq::of([1, 2]).drain_to(&mut d);
        assert_eq!(d, VecDeque::from([0, 1, 2]));
    }

    #[test]
    fn test_filter() {
        let cases: [(&[i32], &[i32]); 6] = [
            (&[], &[]),
            (&[1, 1, 1], &[1, 1, 1]),
            (&[1, 2, 4], &[1]),
            (&[1, 2, 3, 4, 5], &[1, 3, 5]),
            (&[2, 4, 6], &[]),
            (&[7], &[7]),
        ];
        for (values, expected) in cases {
            let seq = Seq::all(values.to_vec()).filter(is_odd);
            assert_eq!(seq.to_vec(), expected);
            assert_eq!(seq.collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_filter_is_lazy() {
        let tested = Cell::new(0);
        let seq = Seq::of([1, 2, 3, 4, 5]).filter(|n| {
            tested.set(tested.get() + 1);
            is_odd(n)
        });
        assert_eq!(tested.get(), 0);
        assert_eq!(seq.clone().limit(2).to_vec(), vec![1, 3]);
        assert_eq!(tested.get(), 3);
    }

    #[test]
    fn test_find_any() {
        assert!(Seq::<i32>::empty().find_any().is_empty());
        assert!(Seq::of([1, 1, 1]).find_any().is_present());
    }

    #[test]
    fn test_find_any_produces_at_most_one() {
        let produced = Cell::new(0);
        let found = counted(Seq::of([1, 1, 1]), &produced).find_any();
        assert_eq!(found, Maybe::just(1));
        assert_eq!(produced.get(), 1);
    }

    #[test]
    fn test_flat_map() {
        let seq = Seq::of([1, 2, 3]).flat_map(|n| Seq::all(vec![n; n as usize]));
        assert_eq!(seq.to_vec(), vec![1, 2, 2, 3, 3, 3]);
        assert_eq!(seq.collect::<Vec<_>>(), vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_flat_map_stops_mid_nested_sequence() {
        let produced = Cell::new(0);
        let seq = Seq::of([10, 20]).flat_map(|n| counted(Seq::all(n..n + 5), &produced));
        assert_eq!(seq.clone().limit(2).to_vec(), vec![10, 11]);
        assert_eq!(produced.get(), 2);

        produced.set(0);
        let mut cursor = seq.pull();
        assert_eq!(cursor.next(), Some(10));
        assert_eq!(cursor.next(), Some(11));
        cursor.stop();
        assert_eq!(produced.get(), 2);
    }

    #[test]
    fn test_for_each() {
        let mut sum = 0;
        Seq::of([1, 2, 3]).for_each(|n| sum += n);
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_generate() {
        let mut last = 0;
        let seq = Seq::generate(move || {
            last += 1;
            last
        });
        let mut count = 0;
        let _ = seq.traverse(|n| {
            count += 1;
            if n == 10 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(count, 10);
    }

    #[test]
    fn test_generate_is_never_cached() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let seq = Seq::generate(move || {
            counter.set(counter.get() + 1);
            counter.get()
        });
        assert_eq!(seq.clone().limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.limit(2).collect::<Vec<_>>(), vec![4, 5]);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_iterate() {
        let seq = Seq::iterate(0, |n| n + 1);
        assert_eq!(seq.clone().limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.clone().limit(3).to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.limit(10).collect::<Vec<_>>().last(), Some(&10));
    }

    #[test]
    fn test_limit() {
        let seq = Seq::of([1, 2, 3, 4]);
        assert_eq!(seq.clone().limit(0).to_vec(), Vec::<i32>::new());
        assert_eq!(seq.clone().limit(2).to_vec(), vec![1, 2]);
        assert_eq!(seq.limit(10).to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_limit_zero_does_not_touch_source() {
        let produced = Cell::new(0);
        let seq = counted(Seq::of([1, 2]), &produced).limit(0);
        assert_eq!(seq.count(), 0);
        assert_eq!(seq.pull().count(), 0);
        assert_eq!(produced.get(), 0);
    }

    #[test]
    fn test_limit_stops_infinite_source() {
        let produced = Rc::new(Cell::new(0));
        let counter = Rc::clone(&produced);
        let seq = Seq::generate(move || {
            counter.set(counter.get() + 1);
            7
        })
        .limit(5);
        assert_eq!(seq.to_vec(), vec![7; 5]);
        assert_eq!(produced.get(), 5);
    }

    #[test]
    fn test_map() {
        let seq = Seq::of([1, 2, 3]).map(|n| n * 2);
        assert_eq!(seq.to_vec(), vec![2, 4, 6]);
        assert_eq!(Seq::<i32>::empty().map(|n| n * 2).count(), 0);
        assert_eq!(
            Seq::of([1, 2]).map(|n| n.to_string()).to_vec(),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_peek_runs_before_downstream() {
        let log = std::cell::RefCell::new(Vec::new());
        let seq = Seq::of([1, 2])
            .peek(|n| log.borrow_mut().push(format!("peek {n}")))
            .map(|n| {
                log.borrow_mut().push(format!("map {n}"));
                n
            });
        assert!(log.borrow().is_empty());
        seq.for_each(|_| ());
        assert_eq!(
            *log.borrow(),
            vec!["peek 1", "map 1", "peek 2", "map 2"]
        );
    }

    #[test]
    fn test_reduce() {
        let cases: [(&[i32], i32); 5] = [
            (&[1, 2, 3, 4], 10),
            (&[-1, -2, -3, -4], -10),
            (&[-1, 1, -1, 1], 0),
            (&[0, 0, 0, 0], 0),
            (&[], 0),
        ];
        for (values, expected) in cases {
            assert_eq!(Seq::all(values.to_vec()).reduce(0, |e, acc| e + acc), expected);
        }
    }

    #[test]
    fn test_reduce_passes_element_first() {
        let seq = Seq::of(["a", "b", "c"]);
        let result = seq.reduce(String::new(), |e, acc| format!("{e}{acc}"));
        assert_eq!(result, "cba");
    }

    #[test]
    fn test_skip() {
        let cases: [(&[i32], usize, &[i32]); 4] = [
            (&[], 2, &[]),
            (&[1, 2, 3], 0, &[1, 2, 3]),
            (&[1, 2, 3, 4], 2, &[3, 4]),
            (&[1, 2], 5, &[]),
        ];
        for (values, n, expected) in cases {
            let seq = Seq::all(values.to_vec()).skip(n);
            assert_eq!(seq.to_vec(), expected);
            // the skipped count starts over for every traversal
            assert_eq!(seq.to_vec(), expected);
            assert_eq!(seq.collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_to_vec() {
        assert_eq!(Seq::all(Vec::<i32>::new()).to_vec(), Vec::<i32>::new());
        assert_eq!(Seq::of([1]).to_vec(), vec![1]);
        assert_eq!(Seq::of([1, 2, 3]).to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_for_loop_over_sequence() {
        let seq: Seq<i32> = (1..=3).collect();
        let mut seen = Vec::new();
        for n in &seq {
            seen.push(n);
        }
        for n in seq {
            seen.push(n * 10);
        }
        assert_eq!(seen, vec![1, 2, 3, 10, 20, 30]);
    }

    #[test]
    fn test_combinators_are_lazy() {
        let produced = Cell::new(0);
        let seq = counted(Seq::of([1, 2, 3]), &produced)
            .filter(is_odd)
            .map(|n| n + 1)
            .skip(1)
            .distinct();
        assert_eq!(produced.get(), 0);
        assert_eq!(seq.to_vec(), vec![4]);
        assert_eq!(produced.get(), 3);
    }

    #[test]
    fn test_debug_does_not_drive_sequence() {
        let produced = Cell::new(0);
        let seq = counted(Seq::of([1, 2]), &produced);
        assert_snapshot!(format!("{seq:?}"), @"Seq { .. }");
        assert_eq!(produced.get(), 0);
    }
}
