#![allow(dead_code)]

use strukt::{StructError, Strukt, struct_type};

mod models {
    use strukt::Strukt;

    #[derive(Strukt)]
    pub struct B {
        pub name: String,
    }

    #[derive(Strukt)]
    pub struct A {
        #[strukt(embedded)]
        pub b: B,
        pub id: i64,
        pub array: Vec<B>,
    }
}

use models::{A, B};

#[test]
fn resolves_plain_struct() {
    let ty = struct_type::<A>().unwrap();
    assert_eq!(ty.name(), "A");
    assert!(ty.signature().ends_with("::models::A"));
}

#[test]
fn resolves_through_pointer_layers() {
    let direct = struct_type::<B>().unwrap();
    assert_eq!(struct_type::<&B>().unwrap(), direct);
    assert_eq!(struct_type::<Option<B>>().unwrap(), direct);
    assert_eq!(struct_type::<Box<B>>().unwrap(), direct);
    // Pointer to pointer, and an absent pointer is no different: the shape
    // is static, no live value is ever consulted.
    assert_eq!(struct_type::<Option<Box<B>>>().unwrap(), direct);
    assert_eq!(struct_type::<&Option<B>>().unwrap(), direct);
}

#[test]
fn collection_shapes_resolve_to_their_element_type() {
    let direct = struct_type::<B>().unwrap();
    let of_slice_of_ptr = struct_type::<Vec<Box<B>>>().unwrap();
    let of_slice = struct_type::<Vec<B>>().unwrap();
    let of_ptr_to_slice = struct_type::<Option<Vec<B>>>().unwrap();
    let of_array = struct_type::<[B; 4]>().unwrap();

    assert_eq!(of_slice_of_ptr.signature(), direct.signature());
    assert_eq!(of_slice.signature(), direct.signature());
    assert_eq!(of_ptr_to_slice.signature(), direct.signature());
    assert_eq!(of_array.signature(), direct.signature());
}

#[test]
fn non_struct_values_are_rejected() {
    assert_eq!(
        struct_type::<i64>().unwrap_err(),
        StructError::NotStruct { kind: "i64" }
    );
    assert_eq!(
        struct_type::<Vec<String>>().unwrap_err(),
        StructError::NotStruct { kind: "String" }
    );
    assert_eq!(
        struct_type::<Option<Box<bool>>>().unwrap_err(),
        StructError::NotStruct { kind: "bool" }
    );
}

#[test]
fn field_keys_are_declaration_ordered() {
    let ty = struct_type::<Vec<Box<A>>>().unwrap();
    assert_eq!(ty.field_keys(), vec!["b", "id", "array"]);
}

#[test]
fn display_uses_the_short_form() {
    let ty = struct_type::<B>().unwrap();
    assert_eq!(ty.to_string(), "models::B");
}

#[test]
fn equality_follows_the_declared_type() {
    assert_eq!(struct_type::<A>().unwrap(), struct_type::<Vec<A>>().unwrap());
    assert_ne!(struct_type::<A>().unwrap(), struct_type::<B>().unwrap());
}

#[test]
fn unit_structs_resolve_with_no_fields() {
    #[derive(Strukt)]
    struct Marker;

    let ty = struct_type::<Marker>().unwrap();
    assert_eq!(ty.name(), "Marker");
    assert!(ty.field_keys().is_empty());
}
