use std::{cell::RefCell, hash::Hash, ops::ControlFlow, rc::Rc};

use ahash::{HashSet, HashSetExt};

use crate::seq::{Cursor, Producer, Seq};

pub(crate) struct Filter<'a, T, P> {
    source: Seq<'a, T>,
    predicate: Rc<P>,
}

impl<'a, T, P> Filter<'a, T, P> {
    pub(crate) fn new(source: Seq<'a, T>, predicate: P) -> Self {
        Self {
            source,
            predicate: Rc::new(predicate),
        }
    }
}

impl<'a, T: 'a, P> Producer<'a, T> for Filter<'a, T, P>
where
    P: Fn(&T) -> bool + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.source.traverse(|item| {
            if (self.predicate)(&item) {
                sink(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let predicate = Rc::clone(&self.predicate);
        Box::new(self.source.cursor().filter(move |item| predicate(item)))
    }
}

pub(crate) struct Map<'a, A, F> {
    source: Seq<'a, A>,
    f: Rc<F>,
}

impl<'a, A, F> Map<'a, A, F> {
    pub(crate) fn new(source: Seq<'a, A>, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<'a, A: 'a, B: 'a, F> Producer<'a, B> for Map<'a, A, F>
where
    F: Fn(A) -> B + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(B) -> ControlFlow<()>) -> ControlFlow<()> {
        self.source.traverse(|item| sink((self.f)(item)))
    }

    fn cursor(&self) -> Cursor<'a, B> {
        let f = Rc::clone(&self.f);
        Box::new(self.source.cursor().map(move |item| f(item)))
    }
}

pub(crate) struct FlatMap<'a, A, F> {
    source: Seq<'a, A>,
    f: Rc<F>,
}

impl<'a, A, F> FlatMap<'a, A, F> {
    pub(crate) fn new(source: Seq<'a, A>, f: F) -> Self {
        Self {
            source,
            f: Rc::new(f),
        }
    }
}

impl<'a, A: 'a, B: 'a, F> Producer<'a, B> for FlatMap<'a, A, F>
where
    F: Fn(A) -> Seq<'a, B> + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(B) -> ControlFlow<()>) -> ControlFlow<()> {
        // a break inside the nested sequence ends the outer traversal too
        self.source.traverse(|item| (self.f)(item).traverse(&mut *sink))
    }

    fn cursor(&self) -> Cursor<'a, B> {
        let f = Rc::clone(&self.f);
        Box::new(self.source.cursor().flat_map(move |item| f(item).cursor()))
    }
}

pub(crate) struct Peek<'a, T, C> {
    source: Seq<'a, T>,
    consumer: Rc<RefCell<C>>,
}

impl<'a, T, C> Peek<'a, T, C> {
    pub(crate) fn new(source: Seq<'a, T>, consumer: C) -> Self {
        Self {
            source,
            consumer: Rc::new(RefCell::new(consumer)),
        }
    }
}

impl<'a, T: 'a, C> Producer<'a, T> for Peek<'a, T, C>
where
    C: FnMut(&T) + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        self.source.traverse(|item| {
            (&mut *self.consumer.borrow_mut())(&item);
            sink(item)
        })
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let consumer = Rc::clone(&self.consumer);
        Box::new(
            self.source
                .cursor()
                .inspect(move |item| (&mut *consumer.borrow_mut())(item)),
        )
    }
}

pub(crate) struct Limit<'a, T> {
    source: Seq<'a, T>,
    count: usize,
}

impl<'a, T> Limit<'a, T> {
    pub(crate) fn new(source: Seq<'a, T>, count: usize) -> Self {
        Self { source, count }
    }
}

impl<'a, T: 'a> Producer<'a, T> for Limit<'a, T> {
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        if self.count == 0 {
            return ControlFlow::Continue(());
        }
        let mut remaining = self.count;
        let mut downstream = ControlFlow::Continue(());
        // only a break from downstream is reported upward
        let _ = self.source.traverse(|item| {
            remaining -= 1;
            downstream = sink(item);
            if downstream.is_break() || remaining == 0 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        downstream
    }

    fn cursor(&self) -> Cursor<'a, T> {
        Box::new(self.source.cursor().take(self.count))
    }
}

pub(crate) struct Skip<'a, T> {
    source: Seq<'a, T>,
    count: usize,
}

impl<'a, T> Skip<'a, T> {
    pub(crate) fn new(source: Seq<'a, T>, count: usize) -> Self {
        Self { source, count }
    }
}

impl<'a, T: 'a> Producer<'a, T> for Skip<'a, T> {
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut skipped = 0;
        self.source.traverse(|item| {
            if skipped < self.count {
                skipped += 1;
                ControlFlow::Continue(())
            } else {
                sink(item)
            }
        })
    }

    fn cursor(&self) -> Cursor<'a, T> {
        Box::new(self.source.cursor().skip(self.count))
    }
}

pub(crate) struct Distinct<'a, T> {
    source: Seq<'a, T>,
}

impl<'a, T> Distinct<'a, T> {
    pub(crate) fn new(source: Seq<'a, T>) -> Self {
        Self { source }
    }
}

impl<'a, T> Producer<'a, T> for Distinct<'a, T>
where
    T: Eq + Hash + Clone + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut seen = HashSet::new();
        self.source.traverse(|item| {
            if seen.insert(item.clone()) {
                sink(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let mut seen = HashSet::new();
        Box::new(
            self.source
                .cursor()
                .filter(move |item| seen.insert(item.clone())),
        )
    }
}
