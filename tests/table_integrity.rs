//! Full-table properties of the authored MCNS registry.
//!
//! These tests iterate every authored row, so a bad table edit (duplicate
//! code, colliding name, broken mapping) fails here rather than in a
//! consumer.

use mcns::{particle_code, particle_name, ParticleRegistry};

#[test]
fn every_row_resolves_forward() {
    for entry in ParticleRegistry::global().entries() {
        assert_eq!(
            particle_name(entry.code),
            entry.name,
            "code {} should resolve to its stored name",
            entry.code
        );
    }
}

#[test]
fn every_row_resolves_in_reverse_regardless_of_case() {
    for entry in ParticleRegistry::global().entries() {
        assert_eq!(particle_code(entry.name), entry.code, "{}", entry.name);
        assert_eq!(
            particle_code(&entry.name.to_lowercase()),
            entry.code,
            "lowercased {}",
            entry.name
        );
        assert_eq!(
            particle_code(&entry.name.to_uppercase()),
            entry.code,
            "uppercased {}",
            entry.name
        );
    }
}

#[test]
fn every_row_round_trips() {
    for entry in ParticleRegistry::global().entries() {
        assert_eq!(particle_code(&particle_name(entry.code)), entry.code);
    }
}

#[test]
fn authored_table_passes_integrity_validation() {
    let registry = ParticleRegistry::global();
    assert!(!registry.is_empty());
    // Rough lower bound on coverage; additions only grow this.
    assert!(
        registry.len() >= 400,
        "table unexpectedly small: {} rows",
        registry.len()
    );
}

#[test]
fn names_are_ascii() {
    for entry in ParticleRegistry::global().entries() {
        assert!(entry.name.is_ascii(), "non-ASCII name {:?}", entry.name);
    }
}

#[test]
fn both_antiparticle_conventions_are_stored_verbatim() {
    // "anti-" prefix convention
    assert_eq!(particle_name(-511), "anti-B0");
    assert_eq!(particle_name(-5122), "anti-Lambda_b0");
    // charge-conjugated names under the prefix
    assert_eq!(particle_name(-3222), "anti-Sigma-");
    assert_eq!(particle_name(-3312), "anti-Xi+");
    // negated code with an independent name, no prefix at all
    assert_eq!(particle_name(-11), "e+");
    assert_eq!(particle_name(-24), "W-");
}

#[test]
fn documented_scenarios_hold() {
    assert_eq!(particle_name(11), "e-");
    assert_eq!(particle_name(-11), "e+");
    assert_eq!(particle_name(511), "B0");
    assert_eq!(particle_code("B+"), 521);
    assert_eq!(particle_code("d*0"), 423);
    assert_eq!(particle_name(999999), "999999");
    assert_eq!(particle_code("not-a-particle"), 0);
}

#[test]
fn placeholder_row_shares_the_not_found_code() {
    // Code 0 is a real row named "-"; the lenient reverse lookup returns 0
    // both for it and for a miss. The strict API keeps them apart.
    assert_eq!(particle_name(0), "-");
    assert_eq!(particle_code("-"), 0);
    assert_eq!(particle_code("unmapped"), 0);
    assert_eq!(ParticleRegistry::global().code("-"), Some(0));
    assert_eq!(ParticleRegistry::global().code("unmapped"), None);
}

#[cfg(feature = "serde")]
#[test]
fn entries_serialize_round_trip() {
    let entries = ParticleRegistry::global().entries();
    let json = serde_json::to_string(entries).expect("serialize table");
    let decoded: Vec<(i32, String)> = serde_json::from_str::<Vec<serde_json::Value>>(&json)
        .expect("parse table json")
        .into_iter()
        .map(|row| {
            (
                row["code"].as_i64().unwrap() as i32,
                row["name"].as_str().unwrap().to_owned(),
            )
        })
        .collect();
    assert_eq!(decoded.len(), entries.len());
    for (entry, (code, name)) in entries.iter().zip(decoded) {
        assert_eq!(entry.code, code);
        assert_eq!(entry.name, name);
    }
}
