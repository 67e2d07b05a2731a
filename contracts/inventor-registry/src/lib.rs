//! # Inventor Registry Contract
//!
//! Registers the inventors who author device designs and lets the admin mark
//! them as verified.
//!
//! ## Inventor Lifecycle
//!
//! ```text
//! [Registered, unverified] ──verify_inventor (admin)──> [Verified]
//!                                                           │
//!                                                           └── verify_inventor again refreshes the date
//! ```
//!
//! Verification is one-way: nothing in this contract clears the flag.
//!
//! ## Security
//!
//! Anyone may register an inventor profile under their own address. Only the
//! admin can verify inventors or transfer the admin role.

#![no_std]
use medledger_common::{admin, storage};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol,
};

pub use medledger_common::LedgerError;


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

/// Storage keys for the inventor registry
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Inventor profile by identifier
    Inventor(String),
    /// Number of registered inventors
    InventorCount,
}

/// Registered inventor profile
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Inventor {
    /// Address that registered the profile
    pub principal: Address,
    pub name: String,
    pub credentials: String,
    pub specialization: String,
    /// Set by the admin, never cleared
    pub verified: bool,
    /// Ledger sequence of the most recent verification
    pub verification_date: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════
//  Events
// ════════════════════════════════════════════════════════════════════

const TOPIC_INVENTOR_REGISTERED: Symbol = symbol_short!("inv_reg");
const TOPIC_INVENTOR_VERIFIED: Symbol = symbol_short!("inv_ver");

#[contracttype]
#[derive(Clone, Debug)]
pub struct InventorEvent {
    pub inventor_id: String,
    pub principal: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct InventorVerifiedEvent {
    pub inventor_id: String,
    pub verified_by: Address,
    pub verified_at: u32,
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct InventorRegistryContract;

#[contractimpl]
impl InventorRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Initialize the contract with an admin address.
    ///
    /// The caller must authorize as `admin`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin::initialize_admin(&env, &admin)
    }

    /// Hand the admin role to `new_admin`. Only the current admin may call this.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    // ── Registration ────────────────────────────────────────────────

    /// Register a new inventor profile owned by `caller`.
    ///
    /// The profile starts unverified. An existing identifier is never
    /// overwritten.
    pub fn register_inventor(
        env: Env,
        caller: Address,
        inventor_id: String,
        name: String,
        credentials: String,
        specialization: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        let key = DataKey::Inventor(inventor_id.clone());
        if env.storage().persistent().has(&key) {
            return Err(LedgerError::AlreadyExists);
        }

        let inventor = Inventor {
            principal: caller.clone(),
            name,
            credentials,
            specialization,
            verified: false,
            verification_date: None,
        };
        env.storage().persistent().set(&key, &inventor);
        storage::extend_record(&env, &key);

        let count: u32 = env
            .storage()
            .instance()
            .get(&DataKey::InventorCount)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::InventorCount, &(count + 1));
        storage::extend_instance(&env);

        env.events().publish(
            (TOPIC_INVENTOR_REGISTERED,),
            InventorEvent {
                inventor_id,
                principal: caller,
            },
        );
        Ok(())
    }

    // ── Verification ────────────────────────────────────────────────

    /// Mark an inventor as verified. Admin only.
    ///
    /// Calling it again on a verified inventor succeeds and moves the
    /// verification date to the current ledger.
    pub fn verify_inventor(env: Env, caller: Address, inventor_id: String) -> Result<(), LedgerError> {
        admin::require_admin(&env, &caller)?;

        let key = DataKey::Inventor(inventor_id.clone());
        let mut inventor: Inventor = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(LedgerError::NotFound)?;

        let now = env.ledger().sequence();
        inventor.verified = true;
        inventor.verification_date = Some(now);
        env.storage().persistent().set(&key, &inventor);
        storage::extend_record(&env, &key);

        env.events().publish(
            (TOPIC_INVENTOR_VERIFIED,),
            InventorVerifiedEvent {
                inventor_id,
                verified_by: caller,
                verified_at: now,
            },
        );
        Ok(())
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Whether the inventor has been verified.
    pub fn is_verified_inventor(env: Env, inventor_id: String) -> Result<bool, LedgerError> {
        Self::get_inventor_details(env, inventor_id)
            .map(|inventor| inventor.verified)
            .ok_or(LedgerError::NotFound)
    }

    /// Get an inventor profile by ID.
    pub fn get_inventor_details(env: Env, inventor_id: String) -> Option<Inventor> {
        env.storage()
            .persistent()
            .get(&DataKey::Inventor(inventor_id))
    }

    /// Number of inventor profiles registered so far.
    pub fn get_inventor_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::InventorCount)
            .unwrap_or(0)
    }

    /// Get the contract admin address.
    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        admin::read_admin(&env)
    }
}
