//! A hash set whose bulk operations go through [`itrz::Seq`].
//!
//! ```
//! use itrz_set::Set;
//!
//! let words = Set::from_slice(&["a", "bb", "cc"]);
//! let lengths = words.map(|w| w.len());
//! assert_eq!(lengths, Set::from_slice(&[1, 2]));
//! ```
mod config;
mod set;

pub use config::SetConfig;
pub use set::Set;
