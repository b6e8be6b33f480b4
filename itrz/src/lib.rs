//! Lazy, restartable sequences.
//!
//! A [`Seq`] describes how to produce elements rather than holding them.
//! Combinators such as [`Seq::filter`] or [`Seq::map`] wrap it in a new
//! description, and nothing is produced until an eager operation like
//! [`Seq::to_vec`] or a [`Pull`] cursor drives it.
//!
//! Sequences are driven by pushing: each element is handed to a sink that
//! answers whether it wants more, and a refusal travels back through every
//! combinator to the source. [`Pull`] offers the opposite view, one element
//! per call, which is what the [`zip`](mod@zip) functions use to walk two sequences
//! in lockstep.
//!
//! ```
//! use itrz::Seq;
//!
//! let evens = Seq::iterate(0, |n| n + 1).filter(|n| n % 2 == 0).limit(3);
//! assert_eq!(evens.to_vec(), vec![2, 4, 6]);
//! ```
mod combinator;
mod error;
mod pull;
mod seq;
mod seq2;
mod sink;
mod source;
pub mod zip;

pub use error::{Error, Result};
pub use itrz_maybe::Maybe;
pub use pull::Pull;
pub use seq::{concat, Seq};
pub use seq2::Seq2;
pub use sink::Sink;
pub use zip::{try_zip_strict, zip, zip_strict, zip_to_shortest};
