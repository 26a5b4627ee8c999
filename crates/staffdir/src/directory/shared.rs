//! A directory shared between callers behind one lock.
//!
//! No directory operation is safe to split across finer-grained locks, so
//! the whole map sits behind a single mutex and every call holds it for its
//! full duration.

use std::fmt::Debug;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::warn;

use super::Directory;

/// Cloneable handle to a directory guarded by a single mutex.
///
/// Clones share the same underlying directory.
#[derive(Debug)]
pub struct SharedDirectory<Id> {
    inner: Arc<Mutex<Directory<Id>>>,
}

impl<Id> Clone for SharedDirectory<Id> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Id: Ord + Clone + Debug> Default for SharedDirectory<Id> {
    fn default() -> Self {
        Self::new(Directory::new())
    }
}

impl<Id: Ord + Clone + Debug> SharedDirectory<Id> {
    /// Wrap an existing directory.
    #[must_use]
    pub fn new(directory: Directory<Id>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    /// Run a read-only operation under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Directory<Id>) -> R) -> R {
        f(&self.lock())
    }

    /// Run a mutating operation under the lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut Directory<Id>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Take a copy of the current directory contents.
    #[must_use]
    pub fn snapshot(&self) -> Directory<Id> {
        self.lock().clone()
    }

    // Directory operations never leave the map half-updated, so poison is
    // safe to clear.
    fn lock(&self) -> MutexGuard<'_, Directory<Id>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering directory lock after a panic in another caller");
            poisoned.into_inner()
        })
    }
}
