//! # Submission Status
//!
//! ```text
//!            ┌──────────────────────── any admin call ────────────────────────┐
//!            ▼                                                                │
//! [Submitted=1] → [UnderReview=2] → [AdditionalInfoRequested=3] → [Approved=4 | Rejected=5]
//! ```
//!
//! Only the numeric range is enforced. Approved and Rejected are terminal by
//! convention; an admin may still move a submission out of them.

use soroban_sdk::contracttype;

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SubmissionStatus {
    Submitted = 1,
    UnderReview = 2,
    AdditionalInfoRequested = 3,
    Approved = 4,
    Rejected = 5,
}

impl SubmissionStatus {
    /// Decode a wire status code. Returns `None` outside `1..=5`.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Submitted),
            2 => Some(Self::UnderReview),
            3 => Some(Self::AdditionalInfoRequested),
            4 => Some(Self::Approved),
            5 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Approved or Rejected. Informational only.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}
