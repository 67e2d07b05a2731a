//! # Test Record Registry Contract
//!
//! Stores evidence of tests performed against device designs. Unlike
//! inventor verification, verifying a test is open to any authorized caller;
//! the record keeps who verified it and when.
//!
//! Repeated verification overwrites the verifier and date; the record stays
//! verified.

#![no_std]
use medledger_common::{admin, storage};
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, String, Symbol, Vec,
};

pub use medledger_common::LedgerError;


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Test record by identifier
    Test(String),
    /// Number of tests registered against a design identifier
    DesignTestCount(String),
    /// Index: (design identifier, position) -> test identifier
    DesignTest(String, u32),
}

/// Largest page returned by `get_tests_for_design`.
pub const MAX_PAGE_SIZE: u32 = 50;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestRecord {
    /// Soft reference into the design registry
    pub design_id: String,
    pub test_type: String,
    pub description: String,
    pub results: String,
    pub results_hash: BytesN<32>,
    /// Ledger sequence at registration
    pub test_date: u32,
    pub verified: bool,
    pub verifier: Option<Address>,
    pub verification_date: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════
//  Events
// ════════════════════════════════════════════════════════════════════

const TOPIC_TEST_REGISTERED: Symbol = symbol_short!("tst_reg");
const TOPIC_TEST_VERIFIED: Symbol = symbol_short!("tst_ver");

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestEvent {
    pub test_id: String,
    pub design_id: String,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestVerifiedEvent {
    pub test_id: String,
    pub verifier: Address,
    pub verified_at: u32,
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct TestRegistryContract;

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl TestRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Initialize the contract with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin::initialize_admin(&env, &admin)
    }

    /// Hand the admin role to `new_admin`. Only the current admin may call this.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    // ── Test Records ────────────────────────────────────────────────

    /// Register a test performed against `design_id`.
    pub fn register_test(
        env: Env,
        caller: Address,
        test_id: String,
        design_id: String,
        test_type: String,
        description: String,
        results: String,
        results_hash: BytesN<32>,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        let key = DataKey::Test(test_id.clone());
        if env.storage().persistent().has(&key) {
            return Err(LedgerError::AlreadyExists);
        }

        let record = TestRecord {
            design_id: design_id.clone(),
            test_type,
            description,
            results,
            results_hash,
            test_date: env.ledger().sequence(),
            verified: false,
            verifier: None,
            verification_date: None,
        };
        env.storage().persistent().set(&key, &record);
        storage::extend_record(&env, &key);

        let count_key = DataKey::DesignTestCount(design_id.clone());
        let position: u32 = env.storage().persistent().get(&count_key).unwrap_or(0);
        let entry_key = DataKey::DesignTest(design_id.clone(), position);
        env.storage().persistent().set(&entry_key, &test_id);
        storage::extend_record(&env, &entry_key);
        env.storage().persistent().set(&count_key, &(position + 1));
        storage::extend_record(&env, &count_key);

        env.events().publish(
            (TOPIC_TEST_REGISTERED, design_id.clone()),
            TestEvent {
                test_id,
                design_id,
                changed_by: caller,
            },
        );
        Ok(())
    }

    /// Mark a test as verified by `caller`. Open to any authorized caller.
    pub fn verify_test(env: Env, caller: Address, test_id: String) -> Result<(), LedgerError> {
        caller.require_auth();

        let key = DataKey::Test(test_id.clone());
        let mut record: TestRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(LedgerError::NotFound)?;

        let now = env.ledger().sequence();
        record.verified = true;
        record.verifier = Some(caller.clone());
        record.verification_date = Some(now);
        env.storage().persistent().set(&key, &record);
        storage::extend_record(&env, &key);

        env.events().publish(
            (TOPIC_TEST_VERIFIED,),
            TestVerifiedEvent {
                test_id,
                verifier: caller,
                verified_at: now,
            },
        );
        Ok(())
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Whether the test has been verified by anyone.
    pub fn is_verified_test(env: Env, test_id: String) -> Result<bool, LedgerError> {
        Self::get_test_details(env, test_id)
            .map(|record| record.verified)
            .ok_or(LedgerError::NotFound)
    }

    /// Get a test record by ID.
    pub fn get_test_details(env: Env, test_id: String) -> Option<TestRecord> {
        env.storage().persistent().get(&DataKey::Test(test_id))
    }

    /// Number of tests registered against a design.
    pub fn get_design_test_count(env: Env, design_id: String) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::DesignTestCount(design_id))
            .unwrap_or(0)
    }

    /// Test identifiers registered against a design, in registration order.
    ///
    /// Returns at most `limit` entries (capped at `MAX_PAGE_SIZE`) starting
    /// at position `start`. Past the end the page is empty.
    pub fn get_tests_for_design(env: Env, design_id: String, start: u32, limit: u32) -> Vec<String> {
        let count = Self::get_design_test_count(env.clone(), design_id.clone());
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE))
            .min(count);

        let mut page = Vec::new(&env);
        for position in start..end {
            if let Some(test_id) = env
                .storage()
                .persistent()
                .get(&DataKey::DesignTest(design_id.clone(), position))
            {
                page.push_back(test_id);
            }
        }
        page
    }

    /// Get the contract admin address.
    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        admin::read_admin(&env)
    }
}
