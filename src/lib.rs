//! # MCNS Particle Registry - Code/Name Lookup
//!
//! ## Purpose
//!
//! Bidirectional lookup between the Monte Carlo Numbering Scheme signed
//! integer particle identifier and its human-readable display name, for
//! physics data-processing tools that translate between the compact codes
//! stored in event-record files and the names shown to people.
//!
//! The whole crate is one immutable table and two query operations. Both
//! operations are total: an unknown code is echoed back as its decimal
//! string and an unknown name returns `0`, so display pipelines never fail
//! on unrecognized input.
//!
//! ## Quick Start
//!
//! ```rust
//! use mcns::{particle_code, particle_name};
//!
//! assert_eq!(particle_name(11), "e-");
//! assert_eq!(particle_name(511), "B0");
//! assert_eq!(particle_code("B+"), 521);
//!
//! // Name matching is case-insensitive
//! assert_eq!(particle_code("d*0"), 423);
//!
//! // Unknown inputs degrade to predictable placeholders
//! assert_eq!(particle_name(999999), "999999");
//! assert_eq!(particle_code("not-a-particle"), 0);
//! ```
//!
//! Strict callers that need to distinguish "found" from "fallback" use the
//! `Option`-returning methods on [`ParticleRegistry`]:
//!
//! ```rust
//! use mcns::ParticleRegistry;
//!
//! let registry = ParticleRegistry::global();
//! assert_eq!(registry.name(521), Some("B+"));
//! assert_eq!(registry.name(999999), None);
//! // The "-" placeholder row (code 0) stays distinguishable from a miss
//! assert_eq!(registry.code("-"), Some(0));
//! assert_eq!(registry.code("no-such"), None);
//! ```
//!
//! ## Integration Points
//!
//! - **Input**: MCNS codes from event records, names from user-facing tools
//! - **Output**: display names and codes; in-band fallbacks on the lenient
//!   surface, `Option` on the strict one
//! - **Table Data**: compiled-in, validated at registry construction
//!   (duplicate codes and case-folded name collisions are defects)
//!
//! ## Architecture Role
//!
//! ```text
//! Event Records → [ParticleRegistry] → Display Tools
//!       ↑                ↓                  ↓
//!   MCNS Codes     Immutable Table     Particle Names
//!   (i32)          Built Once          (ASCII strings)
//! ```
//!
//! ## Concurrency
//!
//! The global registry is built lazily on first use and never mutated
//! afterwards; the one-time initialization is the only synchronization
//! point. Any number of threads may query it concurrently. Both lookups are
//! O(1) hash map reads.
//!
//! ## Table Stability
//!
//! Table contents are versioned data: consumers may depend on specific
//! mappings staying stable across releases. Additions are
//! backward-compatible; changes to existing rows are breaking.

pub mod error;
pub mod registry;
pub mod table;

// Re-export the public surface at the crate root
pub use error::TableError;
pub use registry::{particle_code, particle_name, ParticleRegistry};
pub use table::ParticleEntry;
