//! Property tests for the document store.
//!
//! Random append/remove sequences over the education collection, plus
//! personal info merge behaviour.

use proptest::prelude::*;

use cv_wizard::domain::cv::{CvDocument, Education, PersonalInfoPatch, RecordCollection};
use cv_wizard::domain::foundation::ErrorCode;

#[derive(Debug, Clone)]
enum Op {
    Append,
    Remove(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Append), (0usize..12).prop_map(Op::Remove)]
}

fn education(tag: usize) -> Education {
    Education {
        institution: format!("Institution {}", tag),
        degree: "BSc".into(),
        field_of_study: "CS".into(),
        start_date: "09/2018".into(),
        ..Default::default()
    }
}

fn patch_strategy() -> impl Strategy<Value = PersonalInfoPatch> {
    (
        proptest::option::of("[a-zA-Z ]{0,20}"),
        proptest::option::of("[a-z]{1,8}@[a-z]{1,8}\\.com"),
        proptest::option::of("[0-9]{0,12}"),
    )
        .prop_map(|(full_name, email, phone)| PersonalInfoPatch {
            full_name,
            email,
            phone,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn append_remove_keeps_length_and_order(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut doc = CvDocument::new();
        // Mirror of the collection, by tag
        let mut model: Vec<usize> = Vec::new();
        let mut next_tag = 0;
        let mut appends = 0usize;
        let mut removes = 0usize;

        for op in ops {
            match op {
                Op::Append => {
                    let len = doc.append(education(next_tag));
                    model.push(next_tag);
                    next_tag += 1;
                    appends += 1;
                    prop_assert_eq!(len, model.len());
                }
                Op::Remove(index) => {
                    let before = doc.revision();
                    match doc.remove_item(RecordCollection::Education, index) {
                        Ok(()) => {
                            model.remove(index);
                            removes += 1;
                        }
                        Err(err) => {
                            prop_assert!(index >= model.len());
                            prop_assert_eq!(err.code, ErrorCode::IndexOutOfRange);
                            prop_assert_eq!(doc.revision(), before);
                        }
                    }
                }
            }
        }

        prop_assert_eq!(doc.education().len(), appends - removes);
        let institutions: Vec<String> =
            doc.education().iter().map(|e| e.institution.clone()).collect();
        let expected: Vec<String> =
            model.iter().map(|tag| format!("Institution {}", tag)).collect();
        prop_assert_eq!(institutions, expected);
    }

    #[test]
    fn merging_the_same_patch_twice_is_idempotent(patch in patch_strategy()) {
        let mut doc = CvDocument::new();
        doc.set_personal_info(patch.clone());
        let once = doc.personal_info().clone();
        let revision = doc.revision();

        let changed = doc.set_personal_info(patch);

        prop_assert!(!changed);
        prop_assert_eq!(doc.personal_info(), &once);
        prop_assert_eq!(doc.revision(), revision);
    }

    #[test]
    fn empty_patch_never_changes_personal_info(patch in patch_strategy()) {
        let mut doc = CvDocument::new();
        doc.set_personal_info(patch);
        let before = doc.personal_info().clone();
        let revision = doc.revision();

        prop_assert!(!doc.set_personal_info(PersonalInfoPatch::default()));
        prop_assert_eq!(doc.personal_info(), &before);
        prop_assert_eq!(doc.revision(), revision);
    }

    #[test]
    fn absent_patch_fields_are_retained(patch in patch_strategy()) {
        let mut doc = CvDocument::new();
        doc.set_personal_info(PersonalInfoPatch::default()
            .address("1 Infinite Loop")
            .summary("Original summary"));

        doc.set_personal_info(patch.clone());

        let info = doc.personal_info();
        prop_assert_eq!(info.address.as_str(), "1 Infinite Loop");
        prop_assert_eq!(info.summary.as_str(), "Original summary");
        if let Some(name) = patch.full_name {
            prop_assert_eq!(info.full_name.clone(), name);
        }
    }
}
