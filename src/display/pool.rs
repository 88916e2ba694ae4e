//! Bounded, thread-safe free list for reusable buffers.
//!
//! Checkout never blocks on an empty pool: a fresh value is created
//! instead. Returning to a full pool drops the value.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

/// A value that can be cleared and reused.
pub trait Poolable: Default {
    fn reset(&mut self);
}

pub struct Pool<T> {
    free: Mutex<Vec<T>>,
    capacity: usize,
}

impl<T: Poolable> Pool<T> {
    pub const fn new(capacity: usize) -> Self {
        Self { free: parking_lot::const_mutex(Vec::new()), capacity }
    }

    pub fn acquire(&self) -> PoolGuard<'_, T> {
        let item = self.free.lock().pop().unwrap_or_else(|| {
            tracing::trace!("[POOL] Free list empty, allocating");
            T::default()
        });
        PoolGuard { pool: self, item }
    }

    /// Number of values currently waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn release(&self, mut item: T) {
        item.reset();
        let mut free = self.free.lock();
        if free.len() < self.capacity {
            free.push(item);
        } else {
            tracing::trace!("[POOL] Free list full, dropping value");
        }
    }
}

impl<T> std::fmt::Debug for Pool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("available", &self.free.lock().len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// A checked-out value; returns to its pool on drop.
pub struct PoolGuard<'p, T: Poolable> {
    pool: &'p Pool<T>,
    item: T,
}

impl<T: Poolable> Deref for PoolGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.item
    }
}

impl<T: Poolable> DerefMut for PoolGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.item
    }
}

impl<T: Poolable> Drop for PoolGuard<'_, T> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.item));
    }
}
