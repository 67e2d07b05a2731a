//! # Design Version History
//!
//! Superseded design states are stored as an indexed map keyed by
//! `(design_id, version)`, so any historical version is a single lookup.
//!
//! For a design currently at version `N`, snapshots exist for exactly
//! `1..N`. A snapshot is written once, when its version is superseded, and
//! never touched again.

use medledger_common::storage;
use soroban_sdk::{contracttype, BytesN, Env, String, Vec};

use crate::{DataKey, Design};

/// Frozen copy of a design's mutable fields at the moment it was superseded
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DesignVersion {
    pub specifications: String,
    pub documentation_hash: BytesN<32>,
    /// `last_updated` of the design when this version was live
    pub update_date: u32,
}

/// Freeze the live state of `design` under its current version number.
pub fn archive(env: &Env, design_id: &String, design: &Design) {
    let key = DataKey::Version(design_id.clone(), design.version);
    let snapshot = DesignVersion {
        specifications: design.specifications.clone(),
        documentation_hash: design.documentation_hash.clone(),
        update_date: design.last_updated,
    };
    env.storage().persistent().set(&key, &snapshot);
    storage::extend_record(env, &key);
}

/// Look up a superseded version.
pub fn read(env: &Env, design_id: &String, version: u32) -> Option<DesignVersion> {
    env.storage()
        .persistent()
        .get(&DataKey::Version(design_id.clone(), version))
}

/// All superseded versions of a design, oldest first.
pub fn history(env: &Env, design_id: &String, current_version: u32) -> Vec<DesignVersion> {
    let mut out = Vec::new(env);
    for version in 1..current_version {
        if let Some(snapshot) = read(env, design_id, version) {
            out.push_back(snapshot);
        }
    }
    out
}
