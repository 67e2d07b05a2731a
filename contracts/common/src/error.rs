//! Error kinds shared by every MedLedger registry.
//!
//! All registries return the same codes so that a host surfacing failures
//! to end users can map them without knowing which contract produced them.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// A create call used a key that is already present.
    AlreadyExists = 1,
    /// An admin-only operation was called by someone other than the admin.
    Unauthorized = 2,
    /// The requested key is absent.
    NotFound = 3,
    /// A submission status code outside `1..=5`.
    InvalidStatus = 4,
    /// Admin-gated call before `initialize`.
    NotInitialized = 5,
    /// `initialize` called twice.
    AlreadyInitialized = 6,
}
