//! The per-request auto-close decision.
//!
//! # Responsibilities
//! - Hold the fixed set of extensions that trigger auto-close
//! - Combine scope setting, referrer presence, and path extension into a
//!   single yes/no answer
//!
//! # Design Decisions
//! - Pure and synchronous: no I/O, no allocation, bounded by path length
//! - Every outcome is a plain yes/no; there are no error cases

use crate::policy::extension::last_extension;

/// Extensions that trigger auto-close. Matched case-sensitively.
pub const AUTOCLOSE_EXTENSIONS: [&str; 5] = [".gz", ".bz2", ".zip", ".rar", ".iso"];

/// True if `ext` begins with one of the policy literals.
///
/// The comparison covers only each literal's length, so bytes trailing a
/// matching literal do not disqualify the extension (`.gzXYZ` matches
/// `.gz`). Case-sensitive throughout.
pub fn matches_policy(ext: &str) -> bool {
    AUTOCLOSE_EXTENSIONS.iter().any(|lit| ext.starts_with(lit))
}

/// Should the connection be closed after responding to this request?
///
/// `autoclose` is the resolved scope setting; `has_referrer` reflects header
/// presence only, its content is never inspected.
pub fn should_close(autoclose: bool, has_referrer: bool, path: &str) -> bool {
    if !autoclose || !has_referrer {
        return false;
    }
    match last_extension(path) {
        Some(ext) => matches_policy(ext),
        None => false,
    }
}
