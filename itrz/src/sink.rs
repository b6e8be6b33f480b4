use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    hash::{BuildHasher, Hash},
};

/// A collection that a [`Seq`](crate::Seq) can be drained into.
pub trait Sink<A> {
    /// Add one element.
    fn add(&mut self, a: A);
}

impl<A> Sink<A> for Vec<A> {
    fn add(&mut self, a: A) {
        self.push(a);
    }
}

impl<A> Sink<A> for VecDeque<A> {
    fn add(&mut self, a: A) {
        self.push_back(a);
    }
}

impl<A: Eq + Hash, S: BuildHasher> Sink<A> for HashSet<A, S> {
    fn add(&mut self, a: A) {
        self.insert(a);
    }
}

impl<A: Ord> Sink<A> for BTreeSet<A> {
    fn add(&mut self, a: A) {
        self.insert(a);
    }
}
