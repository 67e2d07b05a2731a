//! TTL policy for registry storage.
//!
//! Records live in persistent storage and are bumped on every write so an
//! active ledger never loses provenance history to archival. The admin
//! identity lives in instance storage and is bumped alongside it.

use soroban_sdk::{Env, IntoVal, Val};

/// Ledgers per day at ~5s close time.
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Remaining TTL below which a record is extended.
pub const RECORD_TTL_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;
/// TTL a record is extended to.
pub const RECORD_TTL_EXTEND_TO: u32 = 31 * DAY_IN_LEDGERS;

/// Extend the TTL of a persistent record that was just written.
pub fn extend_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

/// Extend the TTL of the contract instance (admin and counters).
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}
