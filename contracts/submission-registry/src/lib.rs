//! # Regulatory Submission Registry Contract
//!
//! Tracks regulatory filings (FDA 510(k), CE marking, ...) built from a device
//! design and the tests that support it, and the regulator's decision on each.
//!
//! ## Lifecycle
//!
//! - `create_submission`: any authorized caller files a submission. It
//!   starts at [`SubmissionStatus::Submitted`] with no approval identifier.
//! - `update_submission_status`: the admin records the regulator's response,
//!   overwriting status, comments and approval identifier together.
//!
//! See [`status`] for the transition rules.
//!
//! ## References
//!
//! `design_id` and `test_ids` are soft references into the design and test
//! registries. They are stored exactly as given: order is preserved,
//! duplicates are kept and nothing is checked for existence.

#![no_std]
use medledger_common::{admin, storage};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};

pub use medledger_common::LedgerError;

pub mod events;
pub mod status;

pub use events::{SubmissionEvent, SubmissionStatusEvent};
pub use status::SubmissionStatus;


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Submission by identifier
    Submission(String),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    /// Soft reference into the design registry
    pub design_id: String,
    /// Soft references into the test registry, as supplied
    pub test_ids: Vec<String>,
    /// Regulator the filing was made with (e.g. "FDA", "EMA")
    pub regulatory_body: String,
    /// Ledger sequence at creation
    pub submission_date: u32,
    pub status: SubmissionStatus,
    /// Ledger sequence of the last status change (or creation)
    pub status_update_date: u32,
    /// Regulator-issued approval reference, free text
    pub approval_id: Option<String>,
    pub comments: String,
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct SubmissionRegistryContract;

#[contractimpl]
impl SubmissionRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Initialize the contract with an admin address.
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin::initialize_admin(&env, &admin)
    }

    /// Hand the admin role to `new_admin`. Only the current admin may call this.
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        admin::transfer_admin(&env, &caller, &new_admin)
    }

    // ── Submissions ─────────────────────────────────────────────────

    /// File a new submission at status `Submitted`.
    pub fn create_submission(
        env: Env,
        caller: Address,
        submission_id: String,
        design_id: String,
        test_ids: Vec<String>,
        regulatory_body: String,
        comments: String,
    ) -> Result<(), LedgerError> {
        caller.require_auth();

        let key = DataKey::Submission(submission_id.clone());
        if env.storage().persistent().has(&key) {
            return Err(LedgerError::AlreadyExists);
        }

        let now = env.ledger().sequence();
        let submission = Submission {
            design_id: design_id.clone(),
            test_ids,
            regulatory_body,
            submission_date: now,
            status: SubmissionStatus::Submitted,
            status_update_date: now,
            approval_id: None,
            comments,
        };
        env.storage().persistent().set(&key, &submission);
        storage::extend_record(&env, &key);

        events::emit_submission_created(&env, &submission_id, &design_id, &caller);
        Ok(())
    }

    /// Record a regulator response. Admin only.
    ///
    /// `new_status` is a status code in `1..=5`; any code in range is
    /// accepted regardless of the current status. `approval_id` replaces the
    /// stored value, including clearing it with `None`.
    pub fn update_submission_status(
        env: Env,
        caller: Address,
        submission_id: String,
        new_status: u32,
        comments: String,
        approval_id: Option<String>,
    ) -> Result<(), LedgerError> {
        admin::require_admin(&env, &caller)?;

        let key = DataKey::Submission(submission_id.clone());
        let mut submission: Submission = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(LedgerError::NotFound)?;
        let status = SubmissionStatus::from_code(new_status).ok_or(LedgerError::InvalidStatus)?;

        let previous = submission.status;
        submission.status = status;
        submission.status_update_date = env.ledger().sequence();
        submission.approval_id = approval_id.clone();
        submission.comments = comments;
        env.storage().persistent().set(&key, &submission);
        storage::extend_record(&env, &key);

        events::emit_status_updated(&env, &submission_id, previous, status, &approval_id, &caller);
        Ok(())
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Get a submission by ID.
    pub fn get_submission_details(env: Env, submission_id: String) -> Option<Submission> {
        env.storage()
            .persistent()
            .get(&DataKey::Submission(submission_id))
    }

    /// Current status of a submission.
    pub fn get_submission_status(env: Env, submission_id: String) -> Result<SubmissionStatus, LedgerError> {
        Self::get_submission_details(env, submission_id)
            .map(|submission| submission.status)
            .ok_or(LedgerError::NotFound)
    }

    /// Get the contract admin address.
    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        admin::read_admin(&env)
    }
}
