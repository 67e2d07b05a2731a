//! Events emitted by the design registry.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

/// Topic for design registration events
pub const TOPIC_DESIGN_REGISTERED: Symbol = symbol_short!("dsg_reg");
/// Topic for design update events
pub const TOPIC_DESIGN_UPDATED: Symbol = symbol_short!("dsg_upd");

#[contracttype]
#[derive(Clone, Debug)]
pub struct DesignEvent {
    pub design_id: String,
    pub inventor_id: String,
    /// Version that is live after the change
    pub version: u32,
    pub changed_by: Address,
}

pub fn emit_design_registered(env: &Env, design_id: &String, inventor_id: &String, changed_by: &Address) {
    let event = DesignEvent {
        design_id: design_id.clone(),
        inventor_id: inventor_id.clone(),
        version: 1,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_DESIGN_REGISTERED, design_id.clone()), event);
}

pub fn emit_design_updated(
    env: &Env,
    design_id: &String,
    inventor_id: &String,
    version: u32,
    changed_by: &Address,
) {
    let event = DesignEvent {
        design_id: design_id.clone(),
        inventor_id: inventor_id.clone(),
        version,
        changed_by: changed_by.clone(),
    };
    env.events()
        .publish((TOPIC_DESIGN_UPDATED, design_id.clone()), event);
}
