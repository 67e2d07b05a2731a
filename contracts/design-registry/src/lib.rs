//! # Device Design Registry Contract
//!
//! Records medical-device designs and keeps every superseded revision of
//! their technical content.
//!
//! ## Versioning
//!
//! A design is registered at version 1. Each `update_design` call:
//!
//! 1. freezes the current specifications, documentation hash and update
//!    date under the current version number,
//! 2. overwrites the live specifications and documentation hash,
//! 3. bumps the version by exactly one.
//!
//! Name, description, inventor reference and creation date never change.
//!
//! ## References
//!
//! `inventor_id` points into the inventor registry but is not checked for
//! existence; the two registries are deployed independently.
//!
//! ## Security
//!
//! Registration and updates only require the caller to authorize. Any
//! authorized caller may update any design; there is no ownership check.

#![no_std]
use medledger_common::{admin, storage};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, String, Vec};

pub use medledger_common::LedgerError;

pub mod events;
pub mod versions;

pub use events::DesignEvent;
pub use versions::DesignVersion;


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Live design by identifier
    Design(String),
    /// Superseded snapshot by (design identifier, version)
    Version(String, u32),
}

/// Live state of a device design
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Design {
    /// Soft reference into the inventor registry
    pub inventor_id: String,
    pub name: String,
    pub description: String,
    pub specifications: String,
    /// Digest of the off-chain documentation bundle (not verified)
    pub documentation_hash: BytesN<32>,
    /// Ledger sequence at registration
    pub creation_date: u32,
    /// Ledger sequence of the last registration or update
    pub last_updated: u32,
    /// Starts at 1, +1 per update
    pub version: u32,
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct DesignRegistryContract;

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl DesignRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Initialize the contract with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin::initialize_admin(&env, &admin)
    }

    /// Hand the admin role to `new_admin`. Only the current admin may call this.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    // ── Designs ─────────────────────────────────────────────────────

    /// Register a new design at version 1.
    pub fn register_design(
        env: Env,
        caller: Address,
        design_id: String,
        inventor_id: String,
        name: String,
        description: String,
        specifications: String,
        documentation_hash: BytesN<32>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        let key = DataKey::Design(design_id.clone());
        if env.storage().persistent().has(&key) {
            return Err(LedgerError::AlreadyExists);
        }

        let now = env.ledger().sequence();
        let design = Design {
            inventor_id: inventor_id.clone(),
            name,
            description,
            specifications,
            documentation_hash,
            creation_date: now,
            last_updated: now,
            version: 1,
        };
        env.storage().persistent().set(&key, &design);
        storage::extend_record(&env, &key);

        events::emit_design_registered(&env, &design_id, &inventor_id, &caller);
        Ok(())
    }

    /// Replace a design's specifications and documentation hash, archiving
    /// the superseded revision. Returns the new version number.
    pub fn update_design(
        env: Env,
        caller: Address,
        design_id: String,
        specifications: String,
        documentation_hash: BytesN<32>,
    ) -> Result<u32, LedgerError> {
        caller.require_auth();

        let key = DataKey::Design(design_id.clone());
        let mut design: Design = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(LedgerError::NotFound)?;

        versions::archive(&env, &design_id, &design);

        design.specifications = specifications;
        design.documentation_hash = documentation_hash;
        design.last_updated = env.ledger().sequence();
        design.version += 1;
        env.storage().persistent().set(&key, &design);
        storage::extend_record(&env, &key);

        events::emit_design_updated(&env, &design_id, &design.inventor_id, design.version, &caller);
        Ok(design.version)
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Get the live state of a design.
    pub fn get_design_details(env: Env, design_id: String) -> Option<Design> {
        env.storage().persistent().get(&DataKey::Design(design_id))
    }

    /// Get a superseded version of a design.
    ///
    /// Returns `None` for the live version, for version 0, and for versions
    /// that do not exist yet.
    pub fn get_design_version(env: Env, design_id: String, version: u32) -> Option<DesignVersion> {
        versions::read(&env, &design_id, version)
    }

    /// All superseded versions of a design, oldest first.
    pub fn get_design_history(env: Env, design_id: String) -> Vec<DesignVersion> {
        match Self::get_design_details(env.clone(), design_id.clone()) {
            Some(design) => versions::history(&env, &design_id, design.version),
            None => Vec::new(&env),
        }
    }

    /// Get the contract admin address.
    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        admin::read_admin(&env)
    }
}
