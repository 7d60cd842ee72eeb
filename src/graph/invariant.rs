//! Debug-only invariant assertion helpers.
//!
//! The algorithms use these to keep their postconditions explicit while
//! release builds remain unaffected. Call sites are gated on
//! `debug_assertions` as well, since the checks themselves are not free.

/// Debug-asserts an algorithm invariant with a message.
#[cfg(debug_assertions)]
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
