//! # Admin Access Control
//!
//! Every registry holds a single admin identity in instance storage. The
//! admin is installed once by `initialize` and can only be replaced by the
//! current admin through `transfer_admin`. Registries compose these helpers
//! into their own contract interfaces rather than sharing a contract.
//!
//! | Operation          | Gate                 | Failure                          |
//! |--------------------|----------------------|----------------------------------|
//! | `initialize_admin` | `admin` authorizes   | `AlreadyInitialized`             |
//! | `require_admin`    | caller authorizes    | `NotInitialized`, `Unauthorized` |
//! | `transfer_admin`   | current admin only   | `NotInitialized`, `Unauthorized` |

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::storage;
use crate::LedgerError;

/// Topic for admin transfer events
pub const TOPIC_ADMIN_TRANSFERRED: Symbol = symbol_short!("adm_xfer");

/// Instance storage key for the admin identity
#[contracttype]
#[derive(Clone)]
pub enum AdminKey {
    Admin,
}

/// Event data for an admin handover
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    /// Admin before the transfer
    pub previous: Address,
    /// Admin after the transfer
    pub new_admin: Address,
}

/// Install the first admin. Fails if an admin is already set.
pub fn initialize_admin(env: &Env, admin: &Address) -> Result<(), LedgerError> {
    if env.storage().instance().has(&AdminKey::Admin) {
        return Err(LedgerError::AlreadyInitialized);
    }
    admin.require_auth();
    env.storage().instance().set(&AdminKey::Admin, admin);
    storage::extend_instance(env);
    Ok(())
}

/// Read the current admin.
pub fn read_admin(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .instance()
        .get(&AdminKey::Admin)
        .ok_or(LedgerError::NotInitialized)
}

/// Require that `caller` authorized this invocation and is the admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, LedgerError> {
    caller.require_auth();
    let admin = read_admin(env)?;
    if *caller != admin {
        return Err(LedgerError::Unauthorized);
    }
    Ok(admin)
}

/// Hand the admin role to `new_admin`. Only the current admin may call this.
pub fn transfer_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), LedgerError> {
    let previous = require_admin(env, caller)?;
    env.storage().instance().set(&AdminKey::Admin, new_admin);
    storage::extend_instance(env);

    env.events().publish(
        (TOPIC_ADMIN_TRANSFERRED,),
        AdminTransferredEvent {
            previous,
            new_admin: new_admin.clone(),
        },
    );
    Ok(())
}
