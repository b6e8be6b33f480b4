const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// How a [`Set`](crate::Set) allocates its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetConfig {
    pub(crate) initial_capacity: usize,
}

impl SetConfig {
    pub fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// The number of elements a new or cleared set has room for.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for SetConfig {
    fn default() -> Self {
        Self::new()
    }
}
