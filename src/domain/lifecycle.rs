//! Mounted/unmounted flag guarding result application.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag telling whether the owner of some state is still alive.
///
/// In-flight calls are never aborted. When they finish, their result is only
/// applied if the guard still reports mounted. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Marks the owner as torn down. Irreversible.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_flag() {
        let guard = MountGuard::new();
        let handle = guard.clone();
        assert!(guard.is_mounted());

        handle.unmount();
        assert!(!guard.is_mounted());
    }
}
