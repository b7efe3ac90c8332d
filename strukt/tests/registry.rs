#![allow(dead_code)]

use std::sync::Arc;

use serial_test::serial;
use strukt::registry::{cached_fields, clear_cache};
use strukt::{FieldsInput, RecursiveOption, StructError, Strukt};

#[derive(Strukt)]
struct Document {
    pub id: i64,
    #[strukt(tag = r#"params:"title""#)]
    pub title: String,
}

#[test]
#[serial]
fn repeated_lookups_share_one_computation() {
    let first = cached_fields(FieldsInput::of::<Document>(RecursiveOption::None)).unwrap();
    let second = cached_fields(FieldsInput::of::<Document>(RecursiveOption::None)).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 2);
    assert_eq!(first[1].tag("params"), Some("title"));

    // A different recursion option is a different cache entry.
    let expanded = cached_fields(FieldsInput::of::<Document>(RecursiveOption::Embedded)).unwrap();
    assert!(!Arc::ptr_eq(&first, &expanded));
}

#[test]
#[serial]
fn pointer_reaches_share_the_entry_of_the_underlying_type() {
    let direct = cached_fields(FieldsInput::of::<Document>(RecursiveOption::EmbeddedNoTag)).unwrap();
    let through = cached_fields(FieldsInput::of::<Vec<Box<Document>>>(
        RecursiveOption::EmbeddedNoTag,
    ))
    .unwrap();
    assert!(Arc::ptr_eq(&direct, &through));
}

#[test]
fn non_struct_inputs_are_not_cached() {
    assert_eq!(
        cached_fields(FieldsInput::of::<i64>(RecursiveOption::None)).unwrap_err(),
        StructError::NotStruct { kind: "i64" }
    );
}

#[test]
#[serial]
fn clearing_forces_recomputation() {
    #[derive(Strukt)]
    struct Scratch {
        pub id: i64,
    }

    let before = cached_fields(FieldsInput::of::<Scratch>(RecursiveOption::None)).unwrap();
    clear_cache();
    let after = cached_fields(FieldsInput::of::<Scratch>(RecursiveOption::None)).unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), after.len());
}
