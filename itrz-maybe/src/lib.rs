//! An optional value container.
//!
//! [`Maybe`] holds zero or one value. It converts freely to and from
//! [`Option`], and adds the operations the itrz sequences hand back.
mod error;
mod maybe;

pub use error::{Error, Result};
pub use maybe::Maybe;
