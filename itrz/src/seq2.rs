use std::{fmt, ops::ControlFlow};

use itrz_fn::Function2;

use crate::{pull::Pull, seq::Seq};

/// A lazy sequence of pairs.
///
/// `Seq2` has the same traversal rules as [`Seq`]. It comes out of the
/// [`zip`](mod@crate::zip) functions or a key-value mapping, and reduces back to
/// a `Seq` through [`Seq2::map`] and [`Seq2::flat_map`]. Anything else is done
/// on [`Seq2::into_seq`].
pub struct Seq2<'a, A, B> {
    pairs: Seq<'a, (A, B)>,
}

impl<'a, A: 'a, B: 'a> Seq2<'a, A, B> {
    /// The entries of a mapping, in the mapping's own order.
    pub fn all<M>(mapping: M) -> Self
    where
        M: IntoIterator<Item = (A, B)> + Clone + 'a,
        M::IntoIter: 'a,
    {
        Seq::all(mapping).into()
    }

    /// Combine each pair into one value.
    pub fn map<C: 'a>(self, f: impl Function2<A, B, C> + 'a) -> Seq<'a, C> {
        self.pairs.map(move |(a, b)| f(a, b))
    }

    /// Replace each pair by the elements of the sequence `f` makes of it.
    pub fn flat_map<C: 'a>(self, f: impl Function2<A, B, Seq<'a, C>> + 'a) -> Seq<'a, C> {
        self.pairs.flat_map(move |(a, b)| f(a, b))
    }

    pub fn traverse(&self, mut sink: impl FnMut(A, B) -> ControlFlow<()>) -> ControlFlow<()> {
        self.pairs.traverse(|(a, b)| sink(a, b))
    }

    pub fn for_each(&self, mut consumer: impl FnMut(A, B)) {
        self.pairs.for_each(|(a, b)| consumer(a, b));
    }

    pub fn pull(&self) -> Pull<'a, (A, B)> {
        self.pairs.pull()
    }

    pub fn to_vec(&self) -> Vec<(A, B)> {
        self.pairs.to_vec()
    }

    pub fn into_seq(self) -> Seq<'a, (A, B)> {
        self.pairs
    }
}

impl<'a, A, B> From<Seq<'a, (A, B)>> for Seq2<'a, A, B> {
    fn from(pairs: Seq<'a, (A, B)>) -> Self {
        Self { pairs }
    }
}

impl<A, B> Clone for Seq2<'_, A, B> {
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Seq2<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq2").finish_non_exhaustive()
    }
}

impl<'a, A: 'a, B: 'a> IntoIterator for Seq2<'a, A, B> {
    type Item = (A, B);
    type IntoIter = Pull<'a, (A, B)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pull()
    }
}

impl<'a, A: 'a, B: 'a> IntoIterator for &Seq2<'a, A, B> {
    type Item = (A, B);
    type IntoIter = Pull<'a, (A, B)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pull()
    }
}
