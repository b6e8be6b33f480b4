//! Function kinds used throughout the itrz crates.
//!
//! Each kind is a trait with a blanket implementation for every closure of
//! the matching shape, so these only serve as names in signatures.

/// A function that tests a borrowed value.
pub trait Predicate<A>: Fn(&A) -> bool {}

impl<A, F> Predicate<A> for F where F: Fn(&A) -> bool {}

/// A function that takes a value and returns nothing.
pub trait Consumer<A>: FnMut(A) {}

impl<A, F> Consumer<A> for F where F: FnMut(A) {}

/// A function that creates values without taking arguments.
///
/// A factory may hold state: a new value is requested on every call.
pub trait Factory<A>: FnMut() -> A {}

impl<A, F> Factory<A> for F where F: FnMut() -> A {}

/// A function from `A` to `B`.
pub trait Function<A, B>: Fn(A) -> B {}

impl<A, B, F> Function<A, B> for F where F: Fn(A) -> B {}

/// A function of two arguments.
pub trait Function2<A, B, C>: Fn(A, B) -> C {}

impl<A, B, C, F> Function2<A, B, C> for F where F: Fn(A, B) -> C {}
