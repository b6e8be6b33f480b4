use std::{collections::hash_set, fmt, hash::Hash};

use ahash::{HashSet, HashSetExt};
use itrz::{Seq, Sink};
use itrz_fn::Function;

use crate::config::SetConfig;

/// A collection without duplicate elements.
///
/// Iteration order is unspecified and can differ between two sets holding
/// the same elements.
#[derive(Clone)]
pub struct Set<A> {
    config: SetConfig,
    elems: HashSet<A>,
}

impl<A> Set<A> {
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn config(&self) -> SetConfig {
        self.config
    }

    pub fn iter(&self) -> hash_set::Iter<'_, A> {
        self.elems.iter()
    }
}

impl<A: Eq + Hash> Set<A> {
    pub fn new() -> Self {
        Self::with_config(SetConfig::new())
    }

    pub fn with_config(config: SetConfig) -> Self {
        Self {
            config,
            elems: HashSet::with_capacity(config.initial_capacity),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(SetConfig::new().with_initial_capacity(capacity))
    }

    pub fn from_slice(elements: &[A]) -> Self
    where
        A: Clone,
    {
        elements.iter().cloned().collect()
    }

    /// Returns `true` if `a` was not in the set yet.
    pub fn add(&mut self, a: A) -> bool {
        self.elems.insert(a)
    }

    /// Returns `true` if `a` was in the set.
    pub fn remove(&mut self, a: &A) -> bool {
        self.elems.remove(a)
    }

    pub fn contains(&self, a: &A) -> bool {
        self.elems.contains(a)
    }

    /// Remove every element and return how many there were.
    ///
    /// The storage is reallocated at the configured initial capacity.
    pub fn clear(&mut self) -> usize {
        let removed = self.elems.len();
        self.elems = HashSet::with_capacity(self.config.initial_capacity);
        removed
    }

    /// A sequence over the elements, borrowing the set.
    pub fn all(&self) -> Seq<'_, &A> {
        Seq::all(&self.elems)
    }

    /// A new set holding `f` applied to each element.
    pub fn map<'s, B>(&'s self, f: impl Function<&'s A, B> + 's) -> Set<B>
    where
        B: Eq + Hash + 's,
    {
        let mut result = Set::with_capacity(self.len());
        self.all().map(f).drain_to(&mut result);
        result
    }

    /// A new set holding the elements of every set `f` makes.
    pub fn flat_map<'s, B>(&'s self, f: impl Function<&'s A, Set<B>> + 's) -> Set<B>
    where
        B: Eq + Hash + 's,
    {
        let mut result = Set::with_capacity(self.len());
        self.all().map(f).for_each(|inner| result.extend(inner));
        result
    }
}

impl<A: Eq + Hash> Default for Set<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Eq + Hash> PartialEq for Set<A> {
    fn eq(&self, other: &Self) -> bool {
        self.elems == other.elems
    }
}

impl<A: Eq + Hash> Eq for Set<A> {}

impl<A: fmt::Debug> fmt::Debug for Set<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elems.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Set<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, a) in self.elems.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{a}")?;
        }
        f.write_str("]")
    }
}

impl<A: Eq + Hash> FromIterator<A> for Set<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<A: Eq + Hash> Extend<A> for Set<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.elems.extend(iter);
    }
}

impl<A: Eq + Hash> Sink<A> for Set<A> {
    fn add(&mut self, a: A) {
        self.elems.insert(a);
    }
}

impl<A> IntoIterator for Set<A> {
    type Item = A;
    type IntoIter = hash_set::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'s, A> IntoIterator for &'s Set<A> {
    type Item = &'s A;
    type IntoIter = hash_set::Iter<'s, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Set<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.elems)
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for Set<A>
where
    A: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<A>::deserialize(deserializer).map(Set::from_iter)
    }
}
