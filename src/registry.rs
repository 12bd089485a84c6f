//! # Particle Registry - MCNS Code/Name Lookup
//!
//! ## Purpose
//!
//! Indexed, immutable view over the authored particle table, answering the
//! two query operations event-display tools need: code to name and name to
//! code. The registry is built once, validated during construction, and
//! shared read-only for the process lifetime.
//!
//! ## Integration Points
//!
//! - **Input**: the compiled-in table in [`crate::table`], or any caller
//!   supplied entry slice via [`ParticleRegistry::from_entries`]
//! - **Output**: name/code answers for display pipelines; lenient callers
//!   use [`particle_name`]/[`particle_code`], strict callers use the
//!   `Option`-returning registry methods
//! - **Validation**: duplicate codes and case-folded name collisions are
//!   rejected at construction as [`TableError`]
//!
//! ## Architecture Role
//!
//! ```text
//! Event Records → [ParticleRegistry] → Display Names
//!       ↑                ↓                  ↓
//!   Numeric Codes   Code/Name Index    Lenient Fallbacks
//!   (MCNS)          O(1) Both Ways     (echoed code, 0)
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::error::TableError;
use crate::table::{ParticleEntry, PARTICLE_TABLE};

/// Global registry over the authored table, built on first use.
///
/// The authored table is validated by the test suite, so an integrity
/// defect here can only come from a bad table edit and is treated as a
/// programming error.
static GLOBAL: Lazy<ParticleRegistry> = Lazy::new(|| {
    let registry = ParticleRegistry::from_entries(PARTICLE_TABLE)
        .expect("authored particle table failed integrity validation");
    debug!(entries = registry.len(), "particle registry initialized");
    registry
});

/// Immutable code/name index over a particle table.
///
/// Construction verifies the two invariants lookup correctness depends on:
/// every code maps to exactly one name, and no two names collide under
/// ASCII case-folding. After construction the registry is read-only and
/// safe for unsynchronized concurrent use.
#[derive(Debug)]
pub struct ParticleRegistry {
    entries: &'static [ParticleEntry],
    by_code: HashMap<i32, usize>,
    by_folded_name: HashMap<String, usize>,
}

impl ParticleRegistry {
    /// Build a registry over `entries`, validating table integrity.
    ///
    /// Entries are indexed in slice order. A repeated code or a pair of
    /// names that fold to the same lowercase string is a data defect in the
    /// table, not a lookup-time condition, and fails construction.
    pub fn from_entries(entries: &'static [ParticleEntry]) -> Result<Self, TableError> {
        let mut by_code: HashMap<i32, usize> = HashMap::with_capacity(entries.len());
        let mut by_folded_name: HashMap<String, usize> = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            if let Some(&prev) = by_code.get(&entry.code) {
                return Err(TableError::DuplicateCode {
                    code: entry.code,
                    first: entries[prev].name,
                    second: entry.name,
                });
            }
            by_code.insert(entry.code, index);

            let folded = entry.name.to_ascii_lowercase();
            if let Some(&prev) = by_folded_name.get(&folded) {
                return Err(TableError::AmbiguousName {
                    name: folded,
                    first: entries[prev].code,
                    second: entry.code,
                });
            }
            by_folded_name.insert(folded, index);
        }

        Ok(Self {
            entries,
            by_code,
            by_folded_name,
        })
    }

    /// The process-wide registry over the authored MCNS table.
    pub fn global() -> &'static ParticleRegistry {
        &GLOBAL
    }

    /// Exact-match code lookup. `None` when the code has no row.
    pub fn name(&self, code: i32) -> Option<&'static str> {
        self.by_code.get(&code).map(|&index| self.entries[index].name)
    }

    /// Case-insensitive name lookup. `None` when nothing matches.
    ///
    /// Unlike [`particle_code`], this distinguishes the placeholder row
    /// (`Some(0)`, name `"-"`) from an unknown name (`None`).
    pub fn code(&self, name: &str) -> Option<i32> {
        self.by_folded_name
            .get(&name.to_ascii_lowercase())
            .map(|&index| self.entries[index].code)
    }

    /// Whether `code` has a row in the table.
    pub fn contains_code(&self, code: i32) -> bool {
        self.by_code.contains_key(&code)
    }

    /// All table rows, in authoring order.
    pub fn entries(&self) -> &'static [ParticleEntry] {
        self.entries
    }

    /// Number of table rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display name for an MCNS `code`.
///
/// Unknown codes are echoed back as their decimal string form rather than
/// signaled as errors, so display pipelines never fail on an unrecognized
/// code; they show the raw number instead. Callers that need to detect the
/// fallback use [`ParticleRegistry::name`].
pub fn particle_name(code: i32) -> String {
    match ParticleRegistry::global().name(code) {
        Some(name) => name.to_owned(),
        None => {
            trace!(code, "unknown particle code, echoing numeric value");
            code.to_string()
        }
    }
}

/// MCNS code for a particle `name`, matched case-insensitively.
///
/// Returns `0` when nothing matches. Note that `0` is also the code of the
/// `"-"` placeholder row, so the zero return cannot distinguish "not found"
/// from "found the placeholder"; that ambiguity is part of the table's
/// contract. Callers that need the distinction use
/// [`ParticleRegistry::code`].
pub fn particle_code(name: &str) -> i32 {
    match ParticleRegistry::global().code(name) {
        Some(code) => code,
        None => {
            trace!(name, "unknown particle name, returning 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_to_names() {
        assert_eq!(particle_name(11), "e-");
        assert_eq!(particle_name(-11), "e+");
        assert_eq!(particle_name(511), "B0");
        assert_eq!(particle_name(-511), "anti-B0");
        assert_eq!(particle_name(0), "-");
    }

    #[test]
    fn unknown_codes_echo_their_decimal_form() {
        assert_eq!(particle_name(999999), "999999");
        assert_eq!(particle_name(-999999), "-999999");
        assert_eq!(particle_name(i32::MAX), i32::MAX.to_string());
    }

    #[test]
    fn known_names_resolve_to_codes() {
        assert_eq!(particle_code("B+"), 521);
        assert_eq!(particle_code("J/psi"), 443);
        assert_eq!(particle_code("anti-Lambda_b0"), -5122);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        assert_eq!(particle_code("d*0"), 423);
        assert_eq!(particle_code("D*0"), 423);
        assert_eq!(particle_code("K_s0"), 310);
        assert_eq!(particle_code("UPSILON(4S)"), 300553);
    }

    #[test]
    fn unknown_names_return_zero() {
        assert_eq!(particle_code("not-a-particle"), 0);
        assert_eq!(particle_code(""), 0);
    }

    #[test]
    fn zero_return_is_ambiguous_with_placeholder_row() {
        // The lenient surface cannot tell these apart; the strict one can.
        assert_eq!(particle_code("-"), 0);
        assert_eq!(particle_code("no-such"), 0);
        let registry = ParticleRegistry::global();
        assert_eq!(registry.code("-"), Some(0));
        assert_eq!(registry.code("no-such"), None);
    }

    #[test]
    fn strict_lookups_report_absence() {
        let registry = ParticleRegistry::global();
        assert_eq!(registry.name(999999), None);
        assert_eq!(registry.name(521), Some("B+"));
        assert!(registry.contains_code(-521));
        assert!(!registry.contains_code(999999));
    }

    #[test]
    fn duplicate_code_is_rejected() {
        static BAD: &[ParticleEntry] = &[
            ParticleEntry { code: 11, name: "e-" },
            ParticleEntry { code: 11, name: "mu-" },
        ];
        assert_eq!(
            ParticleRegistry::from_entries(BAD).err(),
            Some(TableError::DuplicateCode {
                code: 11,
                first: "e-",
                second: "mu-",
            })
        );
    }

    #[test]
    fn case_folded_name_collision_is_rejected() {
        static BAD: &[ParticleEntry] = &[
            ParticleEntry { code: 10113, name: "b_10" },
            ParticleEntry { code: 10513, name: "B_10" },
        ];
        assert_eq!(
            ParticleRegistry::from_entries(BAD).err(),
            Some(TableError::AmbiguousName {
                name: "b_10".to_owned(),
                first: 10113,
                second: 10513,
            })
        );
    }

    #[test]
    fn empty_table_is_valid() {
        let registry = ParticleRegistry::from_entries(&[]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.name(0), None);
        assert_eq!(registry.code("-"), None);
    }
}
