/// Fixed-capacity admission counter for connection slots.
///
/// The pool never blocks and never queues. `acquire` reports exhaustion
/// immediately and the caller decides whether to retry or fail.
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    capacity: usize,
    active: usize,
}

impl ConnectionPool {
    /// Default number of slots when none is configured.
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Create a pool with `capacity` slots. A capacity of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            active: 0,
        }
    }

    /// Take a slot. Returns false and leaves the pool untouched when full.
    pub fn acquire(&mut self) -> bool {
        if self.active >= self.capacity {
            return false;
        }
        self.active += 1;
        true
    }

    /// Return a slot. Releasing an empty pool is a no-op.
    pub fn release(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    pub fn available(&self) -> usize {
        self.capacity - self.active
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConnectionPool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
