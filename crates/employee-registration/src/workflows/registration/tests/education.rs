use super::common::*;
use crate::workflows::registration::domain::EducationEntry;
use crate::workflows::registration::engine::EngineError;

#[test]
fn add_then_remove_last_restores_the_sequence() {
    let mut engine = engine();
    fill_required(&mut engine);
    let index = engine.add_education_entry();
    engine
        .set_field_value(&path(&format!("education[{index}].school")), "ITB")
        .expect("accepted");
    let before = engine.values().education.clone();

    let added = engine.add_education_entry();
    assert_eq!(added, before.len());
    assert_eq!(engine.values().education[added], EducationEntry::blank());

    let removed = engine
        .remove_education_entry(added)
        .expect("index in range");

    assert!(removed);
    assert_eq!(engine.values().education, before);
}

#[test]
fn sole_entry_cannot_be_removed() {
    let mut engine = engine();
    fill_required(&mut engine);
    let before = engine.values().education.clone();

    let removed = engine.remove_education_entry(0).expect("guarded no-op");

    assert!(!removed);
    assert_eq!(engine.education_len(), 1);
    assert_eq!(engine.values().education, before);
}

#[test]
fn removing_past_the_end_is_an_error() {
    let mut engine = engine();
    engine.add_education_entry();

    match engine.remove_education_entry(2) {
        Err(EngineError::EducationIndexOutOfRange { index, len }) => {
            assert_eq!((index, len), (2, 2))
        }
        other => panic!("expected out of range error, got {other:?}"),
    }
    assert_eq!(engine.education_len(), 2);
}

#[test]
fn removing_an_entry_keeps_later_entries_in_order() {
    let mut engine = engine();
    engine.add_education_entry();
    engine.add_education_entry();
    for (index, school) in ["SMA 3", "ITB", "MIT"].into_iter().enumerate() {
        engine
            .set_field_value(&path(&format!("education[{index}].school")), school)
            .expect("accepted");
    }

    engine.remove_education_entry(1).expect("index in range");

    let schools: Vec<&str> = engine
        .values()
        .education
        .iter()
        .map(|entry| entry.school.as_str())
        .collect();
    assert_eq!(schools, vec!["SMA 3", "MIT"]);
}

#[test]
fn touched_flags_follow_their_entries_after_removal() {
    let mut engine = engine();
    engine.add_education_entry();
    engine.add_education_entry();
    engine
        .mark_touched(&path("education[2].major"))
        .expect("known path");
    engine
        .mark_touched(&path("education[1].school"))
        .expect("known path");

    engine.remove_education_entry(1).expect("index in range");

    assert!(engine.is_touched(&path("education[1].major")));
    assert!(!engine.is_touched(&path("education[1].school")));
    assert!(engine.field_state(&path("education[2].major")).is_err());
}

#[test]
fn new_blank_entry_blocks_submission_until_removed() {
    let mut engine = engine();
    fill_required(&mut engine);
    assert!(engine.can_submit());

    let index = engine.add_education_entry();
    assert!(!engine.can_submit());
    assert_eq!(
        engine.report().first_invalid(),
        Some(&path(&format!("education[{index}].school")))
    );

    engine.remove_education_entry(index).expect("index in range");
    assert!(engine.can_submit());
}

#[test]
fn entries_have_no_upper_bound() {
    let mut engine = engine();

    for _ in 0..64 {
        engine.add_education_entry();
    }

    assert_eq!(engine.education_len(), 65);
}
