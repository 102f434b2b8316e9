//! Property tests: the letter index mirrors the primary store after arbitrary
//! insert/delete interleavings.

use std::collections::BTreeSet;

use agenda::Directory;
use agenda::error::AgendaError;
use agenda::io::config::LoadPolicy;
use agenda::test_support::{RecordingStore, contact};
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "ana", "Ana", "alice", "Beto", "bia", "Élio", "élan", "ßtrasse", " lead", "trail ",
    "tab\tname", "Zoë", "7even",
];

#[derive(Debug, Clone)]
enum Op {
    Insert(&'static str),
    Delete(&'static str),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(NAMES).prop_map(Op::Insert),
        prop::sample::select(NAMES).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn index_tracks_store_through_mutations(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut dir = Directory::open(RecordingStore::new(), LoadPolicy::Strict).expect("open");
        let mut expected = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(name) => match dir.insert(contact(name, "1")) {
                    Ok(()) => prop_assert!(expected.insert(name)),
                    Err(AgendaError::DuplicateName { .. }) => prop_assert!(expected.contains(name)),
                    Err(err) => prop_assert!(false, "insert {name:?}: {err}"),
                },
                Op::Delete(name) => match dir.delete(name) {
                    Ok(_) => prop_assert!(expected.remove(name)),
                    Err(AgendaError::NotFound { .. }) => prop_assert!(!expected.contains(name)),
                    Err(err) => prop_assert!(false, "delete {name:?}: {err}"),
                },
            }

            let errors = dir.check_invariants();
            prop_assert!(errors.is_empty(), "{:?}", errors);
            prop_assert_eq!(dir.index().len(), dir.len());
            prop_assert!(dir.index().buckets().all(|(_, names)| !names.is_empty()));
            let stored: BTreeSet<&str> = dir.iter().map(|c| c.name.as_str()).collect();
            prop_assert_eq!(&stored, &expected);
        }

        let saved: BTreeSet<&str> = dir
            .store()
            .lines()
            .into_iter()
            .filter_map(|line| line.split(';').next())
            .collect();
        prop_assert_eq!(saved, expected);
    }
}
