use std::collections::HashMap;

use crate::shape::{FieldInfo, Shape};
use crate::tag;

/// One field of a resolved struct, at a given nesting depth.
///
/// Fields are produced by the walker in declaration order; fields promoted
/// out of an embedded struct carry the embedding chain in their index path.
#[derive(Debug, Clone)]
pub struct Field {
    info: &'static FieldInfo,
    index: Vec<usize>,
}

impl Field {
    pub(crate) fn new(info: &'static FieldInfo, index: Vec<usize>) -> Self {
        Self { info, index }
    }

    /// Declared identifier.
    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Positional indices locating this field from the root type through
    /// any embedding chain. Unique per field for a fixed root type.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// The unparsed tag string, `""` when the field carries no tag.
    pub fn raw_tag(&self) -> &'static str {
        self.info.raw_tag
    }

    /// Whether the field was declared `#[strukt(embedded)]`.
    pub fn is_embedded(&self) -> bool {
        self.info.embedded
    }

    /// Value of one tag key, or `None` if the key is absent.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        tag::lookup(self.info.raw_tag, key)
    }

    /// All key/value pairs on the field's tag.
    pub fn tag_map(&self) -> HashMap<&'static str, &'static str> {
        tag::parse_tag(self.info.raw_tag)
    }

    /// Shape of the field's type.
    pub fn shape(&self) -> Shape {
        (self.info.shape)()
    }
}
