//! Static type descriptions.
//!
//! Every introspectable type carries a [`Shape`] built at compile time,
//! either by hand (primitives and containers below) or by
//! `#[derive(Strukt)]`. Shapes reference each other through [`ShapeFn`]
//! thunks rather than direct references so that self-referential types
//! (`Option<Box<Self>>`) do not produce cyclic constant evaluation.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

/// Lazy handle to another type's shape.
///
/// Shapes are small `Copy` values; the thunk keeps self-referential types
/// (`Option<Box<Self>>`) from needing cyclic constants.
pub type ShapeFn = fn() -> Shape;

/// Compile-time description of a type, as far as introspection cares.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub kind: Kind,
}

/// The structural kind of a shape.
///
/// `Pointer` covers every single-value indirection (`Option`, `Box`, `Rc`,
/// `Arc`, references). `Option` is the "reachable but absent" case: a `None`
/// value still exposes its pointee's shape, so traversal never needs a live
/// instance behind the pointer.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// A record type with named, ordered fields.
    Struct(&'static StructInfo),
    /// A nullable or owning single-value indirection.
    Pointer(ShapeFn),
    /// A growable or unsized sequence (`Vec<T>`, `[T]`).
    Slice(ShapeFn),
    /// A fixed-length sequence (`[T; N]`).
    Array(ShapeFn, usize),
    /// A terminal non-record type; the name feeds diagnostics.
    Scalar(&'static str),
}

/// Description of a derived struct: identity plus its declared fields.
#[derive(Debug)]
pub struct StructInfo {
    /// Fully-qualified name (`module_path::Name`), stable across calls.
    /// Two infos describe the same declared type iff their signatures match.
    pub signature: &'static str,
    /// Short display name.
    pub name: &'static str,
    /// Declared public fields, in declaration order.
    pub fields: &'static [FieldInfo],
}

/// One declared field of a struct.
#[derive(Debug)]
pub struct FieldInfo {
    /// Declared identifier.
    pub name: &'static str,
    /// Unparsed tag string from `#[strukt(tag = "...")]`, `""` if absent.
    pub raw_tag: &'static str,
    /// Whether the field was marked `#[strukt(embedded)]`.
    pub embedded: bool,
    /// Shape of the field's type.
    pub shape: ShapeFn,
}

/// Types that expose a static [`Shape`].
///
/// Implemented for primitives and the common container types below, and for
/// structs via `#[derive(Strukt)]`.
pub trait Strukt {
    const SHAPE: Shape;

    fn shape() -> Shape {
        Self::SHAPE
    }
}

/// Shape used for `#[strukt(opaque)]` fields, whose types are deliberately
/// not described any further.
pub fn opaque_shape() -> Shape {
    Shape {
        kind: Kind::Scalar("opaque"),
    }
}

macro_rules! impl_scalar {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Strukt for $ty {
                const SHAPE: Shape = Shape { kind: Kind::Scalar($name) };
            }
        )*
    };
}

impl_scalar! {
    () => "unit",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    String => "String",
}

impl<T: Strukt> Strukt for Option<T> {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt + ?Sized> Strukt for Box<T> {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt + ?Sized> Strukt for Rc<T> {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt + ?Sized> Strukt for Arc<T> {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt + ?Sized> Strukt for &T {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt + ?Sized> Strukt for &mut T {
    const SHAPE: Shape = Shape {
        kind: Kind::Pointer(T::shape),
    };
}

impl<T: Strukt> Strukt for Vec<T> {
    const SHAPE: Shape = Shape {
        kind: Kind::Slice(T::shape),
    };
}

impl<T: Strukt> Strukt for [T] {
    const SHAPE: Shape = Shape {
        kind: Kind::Slice(T::shape),
    };
}

impl<T: Strukt, const N: usize> Strukt for [T; N] {
    const SHAPE: Shape = Shape {
        kind: Kind::Array(T::shape, N),
    };
}

// Maps are terminal as far as struct resolution goes; no element
// short-circuit the way slices have one.
impl<K, V, S> Strukt for HashMap<K, V, S> {
    const SHAPE: Shape = Shape {
        kind: Kind::Scalar("map"),
    };
}

impl<K, V> Strukt for BTreeMap<K, V> {
    const SHAPE: Shape = Shape {
        kind: Kind::Scalar("map"),
    };
}
