use std::sync::Arc;

use eon_core::{
    Attribute, CharacterAction, DistributionModel, DynamicSkillKind, GroupUnitAllocation,
    Severity, Skill, SnapshotError, TargetId, TransitionNotice, UnitCategory,
};
use eon_runtime::{
    CharacterSession, FileSnapshotStore, InMemorySnapshotStore, RuntimeConfig, RuntimeError,
    SnapshotStore,
};

fn memory_session() -> (Arc<InMemorySnapshotStore>, CharacterSession) {
    let store = Arc::new(InMemorySnapshotStore::new());
    let session = CharacterSession::restore(store.clone(), RuntimeConfig::default())
        .expect("in-memory restore");
    (store, session)
}

fn spent(session: &CharacterSession, name: &str) -> i32 {
    session
        .state()
        .find_skill(name)
        .map_or(-1, |skill| skill.spent_units)
}

#[test]
fn empty_store_starts_fresh() {
    let (store, session) = memory_session();

    assert_eq!(session.state(), &eon_core::create_initial_state());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn dispatch_autosaves_and_restores() {
    let (store, mut session) = memory_session();
    session.dispatch(CharacterAction::SetDistributionModel(Some(
        DistributionModel::Balanced,
    )));
    session.dispatch(CharacterAction::assign_chunk(Attribute::Visdom, 0));
    session.dispatch(CharacterAction::SetFreeUnits(4));
    session.dispatch(CharacterAction::set_skill_units("Charm", 2));

    let restored = CharacterSession::restore(store.clone(), RuntimeConfig::default()).unwrap();
    assert_eq!(restored.state(), session.state());
    assert_eq!(spent(&restored, "Charm"), 2);
    assert_eq!(restored.state().chunk_holder(0), Some(Attribute::Visdom));
}

#[test]
fn autosave_off_leaves_store_untouched() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let config = RuntimeConfig {
        autosave: false,
        ..RuntimeConfig::default()
    };
    let mut session = CharacterSession::restore(store.clone(), config).unwrap();
    session.dispatch(CharacterAction::SetFreeUnits(4));

    assert_eq!(store.load().unwrap(), None);
    session.save().unwrap();
    assert!(store.load().unwrap().is_some());
}

#[test]
fn corrupted_snapshot_falls_back_to_fresh_state() {
    let store = Arc::new(InMemorySnapshotStore::with_snapshot("{\"freeUnits\": \"lots\""));
    let session = CharacterSession::restore(store, RuntimeConfig::default()).unwrap();

    assert_eq!(session.state(), &eon_core::create_initial_state());
}

#[test]
fn load_snapshot_rejects_bad_input_and_keeps_state() {
    let (store, mut session) = memory_session();
    session.dispatch(CharacterAction::SetFreeUnits(2));
    let before = session.state().clone();

    let err = session.load_snapshot("[1, 2, 3]").unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Snapshot(SnapshotError::NotAnObject { .. })
    ));
    assert_eq!(session.state(), &before);

    session
        .load_snapshot(r#"{ "freeUnits": 5, "distributionModel": "Balanserad" }"#)
        .unwrap();
    assert_eq!(session.state().free_units, 5);
    assert_eq!(
        session.state().distribution_model,
        Some(DistributionModel::Balanced)
    );
    let stored = store.load().unwrap().expect("autosaved");
    assert_eq!(eon_core::parse_state_str(&stored).unwrap(), *session.state());
}

#[test]
fn clamped_request_reports_notice() {
    let (_, mut session) = memory_session();
    session.dispatch(CharacterAction::SetGroupUnits(vec![GroupUnitAllocation::new(
        UnitCategory::Knowledge,
        2,
    )]));
    session.dispatch(CharacterAction::AddDynamicSkill(Skill::dynamic(
        "Svärd",
        DynamicSkillKind::Expertise,
    )));

    let notice = session.dispatch(CharacterAction::set_skill_units("Svärd", 4));
    assert_eq!(
        notice,
        Some(TransitionNotice::UnitsClamped {
            target: TargetId::skill("Svärd"),
            requested: 4,
            applied: 2,
        })
    );
    assert_eq!(spent(&session, "Svärd"), 2);
    assert!(!session.can_increase_skill_units("Svärd"));

    let usage = session.pool_usage();
    assert_eq!(usage.len(), 1);
    assert_eq!((usage[0].used, usage[0].total), (2, 2));
}

#[test]
fn reset_clears_store_and_state() {
    let (store, mut session) = memory_session();
    session.dispatch(CharacterAction::SetFreeUnits(4));
    assert!(store.load().unwrap().is_some());

    session.reset().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(session.state(), &eon_core::create_initial_state());
}

#[test]
fn validation_uses_configured_rules() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let mut config = RuntimeConfig::default();
    config.rules.attribute_points = 30;
    let mut session = CharacterSession::restore(store, config).unwrap();
    session.dispatch(CharacterAction::SetDistributionModel(Some(
        DistributionModel::FreePoints,
    )));
    session.dispatch(CharacterAction::SetAttributeChunk {
        attribute: Attribute::Intryck,
        value: 10,
    });

    let issue = session
        .validate()
        .into_iter()
        .find(|issue| issue.field == "attributePoints")
        .expect("leftover points warning");
    assert_eq!(issue.message, "20 attributpoäng kvar att fördela");
    assert_eq!(issue.severity, Severity::Warning);
}

#[test]
fn file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig {
        snapshot_dir: Some(dir.path().to_path_buf()),
        ..RuntimeConfig::default()
    };

    let mut session = CharacterSession::open(config.clone()).unwrap();
    session.dispatch(CharacterAction::SetStep(2));
    session.dispatch(CharacterAction::SetAttributeBase {
        attribute: Attribute::Kroppsbyggnad,
        value: 12,
    });
    assert!(dir.path().join("eon5CharTool.json").exists());

    let reopened = CharacterSession::open(config.clone()).unwrap();
    assert_eq!(reopened.state(), session.state());

    let store = FileSnapshotStore::from_config(&config).unwrap();
    store.save("not json").unwrap();
    let recovered = CharacterSession::open(config).unwrap();
    assert_eq!(recovered.state(), &eon_core::create_initial_state());
}

#[test]
fn open_with_config_file_uses_configured_key() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("eon.toml");
    std::fs::write(
        &config_path,
        format!(
            "snapshot_dir = {:?}\nstorage_key = \"hjalte\"\n",
            dir.path().join("saves")
        ),
    )
    .unwrap();

    let mut session = CharacterSession::open_with_config_file(&config_path).unwrap();
    session.dispatch(CharacterAction::SetFreeUnits(1));
    assert!(dir.path().join("saves").join("hjalte.json").exists());

    let err = CharacterSession::open_with_config_file(&dir.path().join("missing.toml"))
        .err()
        .expect("missing config");
    assert!(matches!(err, eon_runtime::RuntimeError::Config(_)));
}
