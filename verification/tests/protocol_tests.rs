//! Protocol engine tests, exercised through the public API with the
//! nullable infrastructure from `aurid-nullables`.

use aurid_nullables::{MemoryStore, NullCodeGen, NullDelivery};
use aurid_store::{
    BadgeStore, CardSettings, Profile, ProfileStore, VerificationStore,
};
use aurid_types::{
    AccountId, BirthDate, Gender, IdentityHash, PassParams, ProfileId, Timestamp,
    VerificationKind, VerificationStatus,
};
use aurid_verification::{CodeGenerator, RandomCodeGen, VerificationError, VerificationProtocol};
use std::collections::BTreeMap;

fn test_profile(store: &MemoryStore) -> ProfileId {
    let id = ProfileId::new([7u8; 16]);
    store
        .create_profile(&Profile {
            id,
            account_id: AccountId::new([1u8; 16]),
            handle: "mina_dev".to_owned(),
            display_name: "Mina".to_owned(),
            real_name: "Kim Mina".to_owned(),
            birth_date: BirthDate::new(1992, 5, 15),
            gender: Gender::Female,
            identity_hash: IdentityHash::new([9u8; 32]),
            phone: "01012345678".to_owned(),
            email: "mina@example.com".to_owned(),
            links: Vec::new(),
            headline: None,
            categories: Vec::new(),
            visibility: BTreeMap::new(),
            short_code: "A1B2C3".to_owned(),
            card_settings: CardSettings::default(),
            created_at: Timestamp::new(0),
        })
        .unwrap();
    id
}

fn protocol<'a>(
    store: &'a MemoryStore,
    codes: &'a dyn CodeGenerator,
    delivery: &'a NullDelivery,
) -> VerificationProtocol<'a> {
    VerificationProtocol::new(store, store, store, codes, delivery, PassParams::default())
}

#[test]
fn issue_then_confirm_grants_one_badge() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("384726");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(1_000))
        .unwrap();
    assert_eq!(issued.destination, "mina@example.com");
    assert_eq!(issued.expires_at, Timestamp::new(1_600));
    assert_eq!(delivery.sent(), vec![("mina@example.com".to_owned(), "384726".to_owned())]);

    let grant = engine
        .confirm(&pid, VerificationKind::Email, "384726", Timestamp::new(1_200))
        .unwrap();
    assert_eq!(grant.verified_at, Timestamp::new(1_200));

    let record = store.get_verification(issued.id).unwrap();
    assert_eq!(record.status, VerificationStatus::Verified);
    assert_eq!(record.verified_at, Some(Timestamp::new(1_200)));

    let badges = store.badges_for(&pid).unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0].badge_type, "existence");
    assert_eq!(badges[0].metadata.destination, "mina@example.com");
}

#[test]
fn issued_code_is_six_digits() {
    let store = MemoryStore::new();
    let codes = RandomCodeGen;
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();
    let record = store.get_verification(issued.id).unwrap();
    assert_eq!(record.metadata.code.len(), 6);
    assert!(record.metadata.code.bytes().all(|b| b.is_ascii_digit()));
}

#[test]
fn confirm_without_pending_record_is_not_found() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("111111");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let err = engine
        .confirm(&pid, VerificationKind::Email, "111111", Timestamp::new(0))
        .unwrap_err();
    assert!(matches!(err, VerificationError::NotFound(VerificationKind::Email)));
}

#[test]
fn wrong_code_leaves_record_pending_and_retryable() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("222333");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();
    let err = engine
        .confirm(&pid, VerificationKind::Email, "999999", Timestamp::new(10))
        .unwrap_err();
    assert!(matches!(err, VerificationError::CodeMismatch));

    let record = store.get_verification(issued.id).unwrap();
    assert_eq!(record.status, VerificationStatus::Pending);

    // Same code still works until expiry.
    engine
        .confirm(&pid, VerificationKind::Email, "222333", Timestamp::new(20))
        .unwrap();
}

#[test]
fn expired_code_leaves_record_pending() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("445566");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();

    // 11 minutes later.
    let err = engine
        .confirm(&pid, VerificationKind::Email, "445566", Timestamp::new(11 * 60))
        .unwrap_err();
    assert!(matches!(err, VerificationError::Expired));
    assert_eq!(
        store.get_verification(issued.id).unwrap().status,
        VerificationStatus::Pending
    );
}

#[test]
fn reissue_after_expiry_succeeds_independently() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::sequence(&["111111", "222222"]);
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();
    let err = engine
        .confirm(&pid, VerificationKind::Email, "111111", Timestamp::new(11 * 60))
        .unwrap_err();
    assert!(matches!(err, VerificationError::Expired));

    // Fresh issue; confirm targets the newest record.
    engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(12 * 60))
        .unwrap();
    engine
        .confirm(&pid, VerificationKind::Email, "222222", Timestamp::new(13 * 60))
        .unwrap();
}

#[test]
fn name_mismatch_is_terminal_and_grants_no_badge() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("777888");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();

    // Simulate the snapshot diverging from the registered name. The
    // profile's real_name is write-once, so this is modeled by mutating
    // the stored snapshot directly.
    store.overwrite_verified_name(issued.id, "Someone Else");

    let err = engine
        .confirm(&pid, VerificationKind::Email, "777888", Timestamp::new(30))
        .unwrap_err();
    assert!(matches!(err, VerificationError::NameMismatch));

    let record = store.get_verification(issued.id).unwrap();
    assert_eq!(record.status, VerificationStatus::Failed);
    assert_eq!(record.verified_at, None);
    assert!(store.badges_for(&pid).unwrap().is_empty());

    // Terminal: the record is no longer pending, so the same code now
    // reports NotFound rather than silently retrying.
    let err = engine
        .confirm(&pid, VerificationKind::Email, "777888", Timestamp::new(40))
        .unwrap_err();
    assert!(matches!(err, VerificationError::NotFound(_)));
}

#[test]
fn phone_kind_uses_phone_destination() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("123456");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let issued = engine
        .issue(&pid, VerificationKind::Phone, Timestamp::new(0))
        .unwrap();
    assert_eq!(issued.destination, "01012345678");

    let grant = engine
        .confirm(&pid, VerificationKind::Phone, "123456", Timestamp::new(5))
        .unwrap();
    assert_eq!(grant.kind, VerificationKind::Phone);
}

#[test]
fn missing_destination_rejected() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::constant("123456");
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);

    let pid = ProfileId::new([8u8; 16]);
    let mut profile = {
        let donor = test_profile(&store);
        store.get_profile(&donor).unwrap()
    };
    profile.id = pid;
    profile.account_id = AccountId::new([2u8; 16]);
    profile.handle = "no_email".to_owned();
    profile.identity_hash = IdentityHash::new([10u8; 32]);
    profile.email = String::new();
    store.create_profile(&profile).unwrap();

    let err = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap_err();
    assert!(matches!(err, VerificationError::NoDestination(VerificationKind::Email)));
}

#[test]
fn confirm_targets_most_recent_pending() {
    let store = MemoryStore::new();
    let codes = NullCodeGen::sequence(&["111111", "222222"]);
    let delivery = NullDelivery::new();
    let engine = protocol(&store, &codes, &delivery);
    let pid = test_profile(&store);

    let first = engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(0))
        .unwrap();
    engine
        .issue(&pid, VerificationKind::Email, Timestamp::new(10))
        .unwrap();

    // The older pending record is implicitly dead: its code no longer
    // matches anything confirm will look at.
    let err = engine
        .confirm(&pid, VerificationKind::Email, "111111", Timestamp::new(20))
        .unwrap_err();
    assert!(matches!(err, VerificationError::CodeMismatch));
    assert_eq!(
        store.get_verification(first.id).unwrap().status,
        VerificationStatus::Pending
    );

    engine
        .confirm(&pid, VerificationKind::Email, "222222", Timestamp::new(30))
        .unwrap();
}
