//! # Security Invariant Tests for MedLedger Registries
//!
//! Asserts the invariants every registry shares. Easy to extend with new
//! invariants as registries are added.
//!
//! ## Enforced invariants
//!
//! - Single initialization per registry
//! - Duplicate creates never overwrite the first record
//! - Admin-gated calls from non-admins fail with `Unauthorized` and change nothing
//! - A rejected call publishes no events
//! - `transfer_admin` moves admin rights completely

use medledger_design_registry::{DesignRegistryContract, DesignRegistryContractClient};
use medledger_inventor_registry::{
    InventorRegistryContract, InventorRegistryContractClient, LedgerError,
};
use medledger_submission_registry::{
    SubmissionRegistryContract, SubmissionRegistryContractClient, SubmissionStatus,
};
use medledger_test_registry::{TestRegistryContract, TestRegistryContractClient};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{vec, Address, BytesN, Env, String, Val, Vec};

struct Registries {
    env: Env,
    admin: Address,
    inventors: InventorRegistryContractClient<'static>,
    designs: DesignRegistryContractClient<'static>,
    tests: TestRegistryContractClient<'static>,
    submissions: SubmissionRegistryContractClient<'static>,
}

fn deploy_all() -> Registries {
    let env = Env::default();
    env.mock_all_auths();
    let admin = Address::generate(&env);

    let inventors =
        InventorRegistryContractClient::new(&env, &env.register(InventorRegistryContract, ()));
    let designs =
        DesignRegistryContractClient::new(&env, &env.register(DesignRegistryContract, ()));
    let tests = TestRegistryContractClient::new(&env, &env.register(TestRegistryContract, ()));
    let submissions = SubmissionRegistryContractClient::new(
        &env,
        &env.register(SubmissionRegistryContract, ()),
    );

    inventors.initialize(&admin);
    designs.initialize(&admin);
    tests.initialize(&admin);
    submissions.initialize(&admin);

    Registries {
        env,
        admin,
        inventors,
        designs,
        tests,
        submissions,
    }
}

fn s(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

/// Events seen so far must be unchanged by the call that just failed.
fn assert_no_new_events(env: &Env, before: &Vec<(Address, Vec<Val>, Val)>) {
    let after = env.events().all();
    assert!(
        after.is_empty() || after == *before,
        "rejected call published an event"
    );
}

/// Invariant: every registry accepts exactly one initialization.
#[test]
fn invariant_single_initialization() {
    let r = deploy_all();
    let other = Address::generate(&r.env);

    assert_eq!(r.inventors.try_initialize(&other), Err(Ok(LedgerError::AlreadyInitialized)));
    assert_eq!(r.designs.try_initialize(&other), Err(Ok(LedgerError::AlreadyInitialized)));
    assert_eq!(r.tests.try_initialize(&other), Err(Ok(LedgerError::AlreadyInitialized)));
    assert_eq!(r.submissions.try_initialize(&other), Err(Ok(LedgerError::AlreadyInitialized)));

    assert_eq!(r.inventors.get_admin(), r.admin);
    assert_eq!(r.designs.get_admin(), r.admin);
    assert_eq!(r.tests.get_admin(), r.admin);
    assert_eq!(r.submissions.get_admin(), r.admin);
}

/// Invariant: a second create with the same key fails and leaves the first intact.
#[test]
fn invariant_create_is_write_once() {
    let r = deploy_all();
    let env = &r.env;
    let first = Address::generate(env);
    let second = Address::generate(env);

    r.inventors
        .register_inventor(&first, &s(env, "k"), &s(env, "A"), &s(env, "MD"), &s(env, "X"));
    assert_eq!(
        r.inventors
            .try_register_inventor(&second, &s(env, "k"), &s(env, "B"), &s(env, "PhD"), &s(env, "Y")),
        Err(Ok(LedgerError::AlreadyExists))
    );
    assert_eq!(r.inventors.get_inventor_details(&s(env, "k")).unwrap().name, s(env, "A"));

    let h1 = BytesN::from_array(env, &[1u8; 32]);
    let h2 = BytesN::from_array(env, &[2u8; 32]);
    r.designs.register_design(
        &first, &s(env, "k"), &s(env, "i"), &s(env, "A"), &s(env, "d"), &s(env, "s1"), &h1,
    );
    assert_eq!(
        r.designs.try_register_design(
            &second, &s(env, "k"), &s(env, "j"), &s(env, "B"), &s(env, "e"), &s(env, "s2"), &h2,
        ),
        Err(Ok(LedgerError::AlreadyExists))
    );
    assert_eq!(r.designs.get_design_details(&s(env, "k")).unwrap().specifications, s(env, "s1"));

    r.tests.register_test(
        &first, &s(env, "k"), &s(env, "d1"), &s(env, "T"), &s(env, "D"), &s(env, "R1"), &h1,
    );
    assert_eq!(
        r.tests.try_register_test(
            &second, &s(env, "k"), &s(env, "d2"), &s(env, "T"), &s(env, "D"), &s(env, "R2"), &h2,
        ),
        Err(Ok(LedgerError::AlreadyExists))
    );
    assert_eq!(r.tests.get_test_details(&s(env, "k")).unwrap().results, s(env, "R1"));

    r.submissions.create_submission(
        &first,
        &s(env, "k"),
        &s(env, "d1"),
        &vec![env, s(env, "t1")],
        &s(env, "FDA"),
        &s(env, "c1"),
    );
    assert_eq!(
        r.submissions.try_create_submission(
            &second,
            &s(env, "k"),
            &s(env, "d2"),
            &vec![env, s(env, "t2")],
            &s(env, "EMA"),
            &s(env, "c2"),
        ),
        Err(Ok(LedgerError::AlreadyExists))
    );
    assert_eq!(
        r.submissions.get_submission_details(&s(env, "k")).unwrap().regulatory_body,
        s(env, "FDA")
    );
}

/// Invariant: admin-gated calls from a non-admin fail and change nothing.
#[test]
fn invariant_non_admin_cannot_mutate_gated_state() {
    let r = deploy_all();
    let env = &r.env;
    let outsider = Address::generate(env);

    r.inventors.register_inventor(
        &outsider, &s(env, "i1"), &s(env, "N"), &s(env, "C"), &s(env, "S"),
    );
    let before = env.events().all();
    assert_eq!(
        r.inventors.try_verify_inventor(&outsider, &s(env, "i1")),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_no_new_events(env, &before);
    assert!(!r.inventors.is_verified_inventor(&s(env, "i1")));

    r.submissions.create_submission(
        &outsider, &s(env, "s1"), &s(env, "d1"), &vec![env], &s(env, "FDA"), &s(env, "c"),
    );
    let before = env.events().all();
    assert_eq!(
        r.submissions.try_update_submission_status(
            &outsider, &s(env, "s1"), &4, &s(env, "self-approved"), &Some(s(env, "FAKE")),
        ),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_no_new_events(env, &before);
    let sub = r.submissions.get_submission_details(&s(env, "s1")).unwrap();
    assert_eq!(sub.status, SubmissionStatus::Submitted);
    assert_eq!(sub.approval_id, None);

    assert_eq!(
        r.inventors.try_transfer_admin(&outsider, &outsider),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        r.designs.try_transfer_admin(&outsider, &outsider),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        r.tests.try_transfer_admin(&outsider, &outsider),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(
        r.submissions.try_transfer_admin(&outsider, &outsider),
        Err(Ok(LedgerError::Unauthorized))
    );
    assert_eq!(r.submissions.get_admin(), r.admin);

    // Rejections for reasons other than authority are just as silent.
    let before = env.events().all();
    assert_eq!(
        r.submissions.try_update_submission_status(
            &r.admin, &s(env, "s1"), &9, &s(env, "bad code"), &None,
        ),
        Err(Ok(LedgerError::InvalidStatus))
    );
    assert_no_new_events(env, &before);
    assert_eq!(r.submissions.get_submission_status(&s(env, "s1")), SubmissionStatus::Submitted);

    let hash = BytesN::from_array(env, &[7u8; 32]);
    r.designs.register_design(
        &outsider, &s(env, "d1"), &s(env, "i1"), &s(env, "A"), &s(env, "d"), &s(env, "s1"), &hash,
    );
    let before = env.events().all();
    assert_eq!(
        r.designs.try_register_design(
            &outsider, &s(env, "d1"), &s(env, "i1"), &s(env, "B"), &s(env, "e"), &s(env, "s2"), &hash,
        ),
        Err(Ok(LedgerError::AlreadyExists))
    );
    assert_no_new_events(env, &before);

    let before = env.events().all();
    assert_eq!(
        r.tests.try_verify_test(&outsider, &s(env, "no-such-test")),
        Err(Ok(LedgerError::NotFound))
    );
    assert_no_new_events(env, &before);
}

/// Invariant: admin identity is per-registry; transferring one leaves the others alone.
#[test]
fn invariant_admin_transfer_is_scoped_to_one_registry() {
    let r = deploy_all();
    let successor = Address::generate(&r.env);

    r.submissions.transfer_admin(&r.admin, &successor);

    assert_eq!(r.submissions.get_admin(), successor);
    assert_eq!(r.inventors.get_admin(), r.admin);
    assert_eq!(r.designs.get_admin(), r.admin);
    assert_eq!(r.tests.get_admin(), r.admin);
}
