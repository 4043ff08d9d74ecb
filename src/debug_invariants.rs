//! Invariant checking for loaded mesh data.
//!
//! `validate_invariants` is the fallible check callers can run on demand;
//! `debug_assert_invariants` panics on violations in debug builds (or with
//! the `strict-invariants` feature) and compiles to nothing otherwise.

use crate::mesh_error::MeshImportError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshImportError>;

    /// Convenience wrapper over [`validate_invariants`](Self::validate_invariants).
    fn invariants_hold(&self) -> bool {
        self.validate_invariants().is_ok()
    }
}

/// Runs a fallible check and panics with `[invariants] <ctx>: <error>` when
/// invariant checking is compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
