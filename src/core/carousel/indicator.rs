//! Page-indicator arithmetic.
//!
//! The internal position grows without bound while the carousel wraps; the
//! indicator folds it back onto the original collection.

/// Which dot is lit for a given render-sequence position.
///
/// `rem_euclid` keeps the result in `[0, len)` even if a transient
/// negative offset ever slips through.  Returns `None` for an empty
/// collection — there is no dot row to light.
pub fn active_dot(position: usize, start: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let offset = position as i64 - start as i64;
    Some(offset.rem_euclid(len as i64) as usize)
}

/// Position for a user-selected dot, or `None` when the selection is out
/// of range.  The jump is an ordinary move: the caller leaves the
/// transition flag alone and runs its usual crossing check afterwards.
pub fn dot_position(dot: usize, start: usize, len: usize) -> Option<usize> {
    if dot < len {
        Some(start + dot)
    } else {
        None
    }
}
