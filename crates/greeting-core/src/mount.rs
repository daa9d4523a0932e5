//! Mount gate.
//!
//! Randomized content must not appear on the first render pass. The gate
//! starts closed and opens exactly once, after the view first commits.

/// One-way flag tracking whether the view has completed its first render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountGate {
    mounted: bool,
}

impl MountGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn open(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
