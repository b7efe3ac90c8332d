//! Struct introspection for binding, mapping, and schema generation.
//!
//! `#[derive(Strukt)]` describes a struct's fields at compile time; the
//! runtime half of the crate resolves arbitrary shapes down to their
//! underlying struct, enumerates fields in declaration order (optionally
//! flattening embedded structs), and maps external key names declared in
//! field tags back to the originating field.
//!
//! Every call recomputes from the static type description and allocates its
//! own output, so the whole API is safe to use concurrently without
//! coordination. Callers that enumerate the same types repeatedly can use
//! [`registry::cached_fields`] instead.
//!
//! # Example
//!
//! ```
//! use strukt::{Strukt, RecursiveOption};
//!
//! #[derive(Strukt)]
//! struct User {
//!     pub id: i64,
//!     #[strukt(tag = r#"params:"name""#)]
//!     pub name: String,
//!     #[strukt(tag = r#"my-tag1:"pass1" params:"pass""#)]
//!     pub pass: String,
//! }
//!
//! let fields = strukt::fields_of::<User>(RecursiveOption::None).unwrap();
//! assert_eq!(fields[1].tag("params"), Some("name"));
//!
//! let names = strukt::tag_map_name::<User>(&["my-tag1", "params"]).unwrap();
//! assert_eq!(names["pass"], "pass1");
//! ```

extern crate self as strukt;

pub mod errors;
pub mod field;
pub mod names;
pub mod openapi;
pub mod registry;
pub mod resolve;
pub mod shape;
pub mod tag;
pub mod walker;

pub use errors::StructError;
pub use field::Field;
pub use names::{
    DEFAULT_PRIORITY_TAGS, FieldMapInput, field_map, field_map_of, tag_map_name,
};
pub use resolve::{StructType, resolve_shape, struct_type};
pub use shape::{FieldInfo, Kind, Shape, StructInfo, Strukt, opaque_shape};
pub use tag::parse_tag;
pub use walker::{FieldsInput, RecursiveOption, fields, fields_of};

// Derive macro, same name as the trait it implements.
pub use strukt_macros::Strukt;
