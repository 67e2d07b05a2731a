//! Events emitted by the submission registry.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::SubmissionStatus;

/// Topic for submission creation events
pub const TOPIC_SUBMISSION_CREATED: Symbol = symbol_short!("sub_new");
/// Topic for status transition events
pub const TOPIC_STATUS_UPDATED: Symbol = symbol_short!("sub_sts");

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubmissionEvent {
    pub submission_id: String,
    pub design_id: String,
    pub status: SubmissionStatus,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SubmissionStatusEvent {
    pub submission_id: String,
    pub previous: SubmissionStatus,
    pub status: SubmissionStatus,
    pub approval_id: Option<String>,
    pub changed_by: Address,
}

pub fn emit_submission_created(env: &Env, submission_id: &String, design_id: &String, changed_by: &Address) {
    let event = SubmissionEvent {
        submission_id: submission_id.clone(),
        design_id: design_id.clone(),
        status: SubmissionStatus::Submitted,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_SUBMISSION_CREATED, design_id.clone()), event);
}

pub fn emit_status_updated(
    env: &Env,
    submission_id: &String,
    previous: SubmissionStatus,
    status: SubmissionStatus,
    approval_id: &Option<String>,
    changed_by: &Address,
) {
    let event = SubmissionStatusEvent {
        submission_id: submission_id.clone(),
        previous,
        status,
        approval_id: approval_id.clone(),
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_STATUS_UPDATED, submission_id.clone()), event);
}
