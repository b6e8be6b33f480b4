//! Pairing two sequences element by element.
//!
//! A zip reads both sources in lockstep, so it opens a [`Pull`] cursor on
//! each of them for every traversal. Both cursors are released when the
//! traversal ends, however it ends.
use std::ops::ControlFlow;

use tracing::debug;

use crate::{
    error,
    pull::Pull,
    seq::{Cursor, Producer, Seq},
    seq2::Seq2,
};

type Step<'a, A, B, P> = fn(&mut Pull<'a, A>, &mut Pull<'a, B>) -> Option<P>;

struct Zipped<'a, A, B, P> {
    left: Seq<'a, A>,
    right: Seq<'a, B>,
    step: Step<'a, A, B, P>,
}

impl<'a, A: 'a, B: 'a, P: 'a> Producer<'a, P> for Zipped<'a, A, B, P> {
    fn traverse(&self, sink: &mut dyn FnMut(P) -> ControlFlow<()>) -> ControlFlow<()> {
        for pair in self.cursor() {
            sink(pair)?;
        }
        ControlFlow::Continue(())
    }

    fn cursor(&self) -> Cursor<'a, P> {
        let mut left = self.left.pull();
        let mut right = self.right.pull();
        let step = self.step;
        Box::new(std::iter::from_fn(move || step(&mut left, &mut right)))
    }
}

fn zipped<'a, A: 'a, B: 'a, P: 'a>(
    left: Seq<'a, A>,
    right: Seq<'a, B>,
    step: Step<'a, A, B, P>,
) -> Seq<'a, P> {
    Seq::from_producer(Zipped { left, right, step })
}

fn longest_step<A: Default, B: Default>(
    left: &mut Pull<'_, A>,
    right: &mut Pull<'_, B>,
) -> Option<(A, B)> {
    match (left.next(), right.next()) {
        (None, None) => None,
        (a, b) => Some((a.unwrap_or_default(), b.unwrap_or_default())),
    }
}

fn shortest_step<A, B>(left: &mut Pull<'_, A>, right: &mut Pull<'_, B>) -> Option<(A, B)> {
    // the right side is not pulled once the left one is exhausted
    let a = left.next()?;
    let b = right.next()?;
    Some((a, b))
}

fn strict_step<A, B>(
    left: &mut Pull<'_, A>,
    right: &mut Pull<'_, B>,
) -> Option<error::Result<(A, B)>> {
    match (left.next(), right.next()) {
        (None, None) => None,
        (Some(a), Some(b)) => Some(Ok((a, b))),
        _ => {
            debug!("strict zip over sequences of uneven length");
            // nothing follows the error
            left.stop();
            right.stop();
            Some(Err(error::Error::UnevenSequenceLengths))
        }
    }
}

/// Pair up two sequences until both are exhausted.
///
/// Once one side runs out, its slot is filled with `Default::default()`
/// for the remaining pairs.
pub fn zip<'a, A, B>(left: Seq<'a, A>, right: Seq<'a, B>) -> Seq2<'a, A, B>
where
    A: Default + 'a,
    B: Default + 'a,
{
    zipped(left, right, longest_step::<A, B>).into()
}

/// Pair up two sequences until either is exhausted. The rest of the
/// longer one is never produced.
pub fn zip_to_shortest<'a, A: 'a, B: 'a>(left: Seq<'a, A>, right: Seq<'a, B>) -> Seq2<'a, A, B> {
    zipped(left, right, shortest_step::<A, B>).into()
}

/// Pair up two sequences that must be of the same length.
///
/// # Panics
///
/// Traversal panics with [`error::Error::UnevenSequenceLengths`] as soon
/// as one side runs out while the other still has an element. Pairs before
/// that point have already been produced. See [`try_zip_strict`] for a
/// version that reports the mismatch instead.
pub fn zip_strict<'a, A: 'a, B: 'a>(left: Seq<'a, A>, right: Seq<'a, B>) -> Seq2<'a, A, B> {
    try_zip_strict(left, right)
        .map(|pair| match pair {
            Ok(pair) => pair,
            Err(e) => panic!("{e}"),
        })
        .into()
}

/// Pair up two sequences that must be of the same length.
///
/// A length mismatch is produced as a single `Err` element, after which the
/// sequence ends.
pub fn try_zip_strict<'a, A: 'a, B: 'a>(
    left: Seq<'a, A>,
    right: Seq<'a, B>,
) -> Seq<'a, error::Result<(A, B)>> {
    zipped(left, right, strict_step::<A, B>)
}
