//! Shared building blocks for the MedLedger registries: the error taxonomy,
//! admin access control and storage TTL policy.
//!
//! The `#[cfg(test)]` modules also host cross-contract invariant and
//! end-to-end provenance tests that exercise all four registries together.

#![cfg_attr(not(test), no_std)]

pub mod admin;
mod error;
pub mod storage;

pub use error::LedgerError;



#[cfg(test)]
mod security_invariant_test;
