use std::iter::FusedIterator;

use tracing::trace;

use crate::seq::Cursor;

/// A pull cursor over one traversal of a [`Seq`](crate::Seq).
///
/// Each call to [`Iterator::next`] resumes the traversal just long enough
/// to produce one element. The suspended traversal is released when the
/// sequence is exhausted, when [`Pull::stop`] is called, or when the cursor
/// is dropped, whichever comes first.
pub struct Pull<'a, T> {
    cursor: Option<Cursor<'a, T>>,
}

impl<'a, T> Pull<'a, T> {
    pub(crate) fn new(cursor: Cursor<'a, T>) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// Release the traversal. Calling this more than once is harmless.
    pub fn stop(&mut self) {
        if self.cursor.take().is_some() {
            trace!("pull cursor released");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.cursor.is_none()
    }
}

impl<T> Iterator for Pull<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let next = self.cursor.as_mut()?.next();
        if next.is_none() {
            self.stop();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Some(cursor) => cursor.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<T> FusedIterator for Pull<'_, T> {}

impl<T> Drop for Pull<'_, T> {
    fn drop(&mut self) {
        self.stop();
    }
}
