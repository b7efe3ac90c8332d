//! Resolution of external key names onto fields.
//!
//! Every field resolves to exactly one name: the value of the first
//! priority tag present on it, or its declared identifier when no priority
//! tag matches. The full priority list is exhausted for a field before the
//! identifier fallback applies; resolution never interleaves across fields.
//! When two fields resolve to the same name, the later one in traversal
//! order wins — embedding can legitimately shadow outer names, so this is a
//! deliberate tie-break, not an error.

use std::collections::HashMap;

use crate::errors::StructError;
use crate::field::Field;
use crate::shape::{Shape, Strukt};
use crate::walker::{self, FieldsInput, RecursiveOption};

/// Tag keys consulted by callers that have no priority list of their own,
/// most specific first.
pub const DEFAULT_PRIORITY_TAGS: &[&str] = &["param", "params", "json"];

/// Request for [`field_map`].
#[derive(Debug, Clone, Copy)]
pub struct FieldMapInput<'a> {
    pub shape: Shape,
    /// Tag keys consulted in order; the first key present on a field
    /// supplies its resolved name. May be empty.
    pub priority_tags: &'a [&'a str],
    pub recursive_option: RecursiveOption,
}

impl<'a> FieldMapInput<'a> {
    pub fn of<T: Strukt + ?Sized>(
        priority_tags: &'a [&'a str],
        recursive_option: RecursiveOption,
    ) -> Self {
        Self {
            shape: T::shape(),
            priority_tags,
            recursive_option,
        }
    }
}

/// Map resolved names to their fields.
pub fn field_map(input: FieldMapInput<'_>) -> Result<HashMap<String, Field>, StructError> {
    let fields = walker::fields(FieldsInput {
        shape: input.shape,
        recursive_option: input.recursive_option,
    })?;
    let mut map = HashMap::with_capacity(fields.len());
    for field in fields {
        let resolved = resolved_name(&field, input.priority_tags);
        map.insert(resolved.to_string(), field);
    }
    Ok(map)
}

/// Convenience form of [`field_map`] for a statically known type.
pub fn field_map_of<T: Strukt + ?Sized>(
    priority_tags: &[&str],
    recursive_option: RecursiveOption,
) -> Result<HashMap<String, Field>, StructError> {
    field_map(FieldMapInput::of::<T>(priority_tags, recursive_option))
}

/// Map declared identifiers to resolved names, with embedded structs
/// expanded unconditionally.
///
/// This is the primitive used by parameter binding and serialization: it
/// answers "under these tag keys, what does each field call itself on the
/// wire?". Fields without a matching priority tag map to their own
/// identifier.
pub fn tag_map_name<T: Strukt + ?Sized>(
    priority_tags: &[&str],
) -> Result<HashMap<String, String>, StructError> {
    let fields = walker::fields_of::<T>(RecursiveOption::Embedded)?;
    let mut map = HashMap::with_capacity(fields.len());
    for field in fields {
        let resolved = resolved_name(&field, priority_tags);
        map.insert(field.name().to_string(), resolved.to_string());
    }
    Ok(map)
}

fn resolved_name(field: &Field, priority_tags: &[&str]) -> &'static str {
    for key in priority_tags {
        if let Some(value) = field.tag(key) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    field.name()
}
