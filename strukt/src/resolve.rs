//! Resolution from an arbitrary shape to its underlying struct type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::StructError;
use crate::shape::{FieldInfo, Kind, Shape, StructInfo, Strukt};

/// Handle to a resolved struct type.
///
/// Two handles are equal iff they describe the same declared type, compared
/// by fully-qualified signature.
#[derive(Debug, Clone, Copy)]
pub struct StructType {
    info: &'static StructInfo,
}

impl StructType {
    pub(crate) fn new(info: &'static StructInfo) -> Self {
        Self { info }
    }

    /// Stable fully-qualified name, e.g. `my_app::models::User`.
    pub fn signature(&self) -> &'static str {
        self.info.signature
    }

    /// Short display name, e.g. `User`.
    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Declared public fields, in declaration order.
    pub fn fields(&self) -> &'static [FieldInfo] {
        self.info.fields
    }

    /// Declared field identifiers, in declaration order.
    pub fn field_keys(&self) -> Vec<&'static str> {
        self.info.fields.iter().map(|f| f.name).collect()
    }

    pub(crate) fn info(&self) -> &'static StructInfo {
        self.info
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.info.signature == other.info.signature
    }
}

impl Eq for StructType {}

impl Hash for StructType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.info.signature.hash(state);
    }
}

impl fmt::Display for StructType {
    /// Short `module::Name` form, using the last module segment only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let module = match self.info.signature.rsplit_once("::") {
            Some((path, _)) => path.rsplit("::").next().unwrap_or(path),
            None => "",
        };
        if module.is_empty() {
            write!(f, "{}", self.info.name)
        } else {
            write!(f, "{}::{}", module, self.info.name)
        }
    }
}

/// Resolve the struct type underlying `T`.
///
/// `T` may be the struct itself or reach it through any mix of pointer-like
/// wrappers (`Option`, `Box`, references), slices, and arrays; collection
/// shapes resolve to their element type. Fails with
/// [`StructError::NotStruct`] when no struct is reachable.
pub fn struct_type<T: Strukt + ?Sized>() -> Result<StructType, StructError> {
    resolve_shape(T::shape())
}

/// Shape-level variant of [`struct_type`].
pub fn resolve_shape(shape: Shape) -> Result<StructType, StructError> {
    let mut current = shape;
    loop {
        match current.kind {
            Kind::Struct(info) => return Ok(StructType::new(info)),
            Kind::Pointer(next) | Kind::Slice(next) | Kind::Array(next, _) => current = next(),
            Kind::Scalar(kind) => return Err(StructError::NotStruct { kind }),
        }
    }
}

/// Strip pointer-like wrappers only, as embedding permits (a struct or a
/// pointer to one); slices and arrays are not valid embeds.
pub(crate) fn embedded_struct(shape: Shape) -> Option<&'static StructInfo> {
    let mut current = shape;
    loop {
        match current.kind {
            Kind::Struct(info) => return Some(info),
            Kind::Pointer(next) => current = next(),
            Kind::Slice(_) | Kind::Array(..) | Kind::Scalar(_) => return None,
        }
    }
}
