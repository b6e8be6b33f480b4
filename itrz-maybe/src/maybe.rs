use std::fmt;

use itrz_fn::{Factory, Function, Predicate};

use crate::error;

/// A container holding either one value or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maybe<A> {
    value: Option<A>,
}

impl<A> Maybe<A> {
    /// A `Maybe` holding `value`.
    pub fn just(value: A) -> Self {
        Self { value: Some(value) }
    }

    /// An empty `Maybe`.
    pub fn nothing() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Access the held value.
    ///
    /// # Panics
    ///
    /// Accessing an empty `Maybe` is a programming error and panics with
    /// [`error::Error::EmptyValueAccessed`]. Use [`Maybe::try_get`] when
    /// emptiness is expected.
    pub fn get(&self) -> &A {
        match self.try_get() {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Access the held value, or fail if there is none.
    pub fn try_get(&self) -> error::Result<&A> {
        self.value.as_ref().ok_or(error::Error::EmptyValueAccessed)
    }

    pub fn as_ref(&self) -> Maybe<&A> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    pub fn into_inner(self) -> Option<A> {
        self.value
    }

    /// The held value, or `default` if empty.
    pub fn or(self, default: A) -> A {
        self.value.unwrap_or(default)
    }

    /// The held value, or one created by `factory` if empty.
    ///
    /// The factory is only called when the `Maybe` is empty.
    pub fn or_else(self, factory: impl Factory<A>) -> A {
        self.value.unwrap_or_else(factory)
    }

    /// Keep the value only if it matches `predicate`.
    pub fn filter(self, predicate: impl Predicate<A>) -> Self {
        Self {
            value: self.value.filter(|value| predicate(value)),
        }
    }

    pub fn map<B>(self, f: impl Function<A, B>) -> Maybe<B> {
        Maybe {
            value: self.value.map(f),
        }
    }

    pub fn flat_map<B>(self, f: impl Function<A, Maybe<B>>) -> Maybe<B> {
        match self.value {
            Some(value) => f(value),
            None => Maybe::nothing(),
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::nothing()
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self { value }
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.value
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "Just({value})"),
            None => write!(f, "Nothing"),
        }
    }
}

// a present value encodes as the bare value, an empty one as null
#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Maybe<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<A>::deserialize(deserializer).map(Maybe::from)
    }
}
