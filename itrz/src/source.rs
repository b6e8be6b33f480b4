use std::{cell::RefCell, ops::ControlFlow, rc::Rc};

use crate::seq::{Cursor, Producer, Seq};

/// A source that asks a factory for a fresh iterator on every traversal.
pub(crate) struct FromIterFn<F> {
    make: Rc<F>,
}

impl<F> FromIterFn<F> {
    pub(crate) fn new(make: F) -> Self {
        Self { make: Rc::new(make) }
    }
}

impl<'a, T, I, F> Producer<'a, T> for FromIterFn<F>
where
    F: Fn() -> I + 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        for item in (self.make)() {
            sink(item)?;
        }
        ControlFlow::Continue(())
    }

    fn cursor(&self) -> Cursor<'a, T> {
        Box::new((self.make)().into_iter())
    }
}

/// An infinite source calling a factory once per element.
pub(crate) struct Generate<F> {
    factory: Rc<RefCell<F>>,
}

impl<F> Generate<F> {
    pub(crate) fn new(factory: F) -> Self {
        Self {
            factory: Rc::new(RefCell::new(factory)),
        }
    }
}

impl<'a, T, F> Producer<'a, T> for Generate<F>
where
    F: FnMut() -> T + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        loop {
            // the borrow must end before the element is handed on, as the
            // sink may pull from another traversal of this same source
            let item = (&mut *self.factory.borrow_mut())();
            sink(item)?;
        }
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let factory = Rc::clone(&self.factory);
        Box::new(std::iter::repeat_with(move || {
            (&mut *factory.borrow_mut())()
        }))
    }
}

/// An infinite source applying `step` to the previous element, starting
/// from `seed`. The seed itself is not produced.
pub(crate) struct Iterate<T, F> {
    seed: T,
    step: Rc<F>,
}

impl<T, F> Iterate<T, F> {
    pub(crate) fn new(seed: T, step: F) -> Self {
        Self {
            seed,
            step: Rc::new(step),
        }
    }
}

impl<'a, T, F> Producer<'a, T> for Iterate<T, F>
where
    T: Clone + 'a,
    F: Fn(&T) -> T + 'a,
{
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        let mut last = self.seed.clone();
        loop {
            last = (self.step)(&last);
            sink(last.clone())?;
        }
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let step = Rc::clone(&self.step);
        let mut last = self.seed.clone();
        Box::new(std::iter::repeat_with(move || {
            last = step(&last);
            last.clone()
        }))
    }
}

/// Each sequence in turn.
pub(crate) struct Concat<'a, T> {
    seqs: Rc<[Seq<'a, T>]>,
}

impl<'a, T> Concat<'a, T> {
    pub(crate) fn new(seqs: Vec<Seq<'a, T>>) -> Self {
        Self { seqs: seqs.into() }
    }
}

impl<'a, T: 'a> Producer<'a, T> for Concat<'a, T> {
    fn traverse(&self, sink: &mut dyn FnMut(T) -> ControlFlow<()>) -> ControlFlow<()> {
        for seq in self.seqs.iter() {
            seq.traverse(&mut *sink)?;
        }
        ControlFlow::Continue(())
    }

    fn cursor(&self) -> Cursor<'a, T> {
        let seqs = Rc::clone(&self.seqs);
        // a later sequence only opens its cursor once the earlier ones are
        // exhausted
        Box::new((0..seqs.len()).flat_map(move |i| seqs[i].cursor()))
    }
}
