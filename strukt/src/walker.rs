//! Ordered field enumeration, with optional expansion of embedded structs.

use crate::errors::StructError;
use crate::field::Field;
use crate::resolve::{self, embedded_struct};
use crate::shape::{Shape, StructInfo, Strukt};

/// How the walker treats `#[strukt(embedded)]` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecursiveOption {
    /// Report embedded fields as single opaque fields, never expanded.
    #[default]
    None,
    /// Expand embedded struct fields that carry no tag; a tag suppresses
    /// expansion.
    EmbeddedNoTag,
    /// Expand embedded struct fields regardless of tags.
    Embedded,
}

/// Request for [`fields`].
#[derive(Debug, Clone, Copy)]
pub struct FieldsInput {
    pub shape: Shape,
    pub recursive_option: RecursiveOption,
}

impl FieldsInput {
    pub fn of<T: Strukt + ?Sized>(recursive_option: RecursiveOption) -> Self {
        Self {
            shape: T::shape(),
            recursive_option,
        }
    }
}

/// Enumerate the fields of the struct type underlying `input.shape`, in
/// declaration order.
///
/// Expanded embedded fields are spliced in place of the embedding field,
/// each with its index path prefixed by the embedding chain. Embedded
/// fields whose type does not strip (through pointers) to a struct, and
/// embedded fields excluded by the recursion option, are emitted as
/// ordinary single fields. Non-public fields never appear; the derive does
/// not describe them.
pub fn fields(input: FieldsInput) -> Result<Vec<Field>, StructError> {
    let root = resolve::resolve_shape(input.shape)?;
    let mut out = Vec::new();
    let mut visiting = vec![root.signature()];
    walk(root.info(), input.recursive_option, &[], &mut visiting, &mut out);
    Ok(out)
}

/// Convenience form of [`fields`] for a statically known type.
pub fn fields_of<T: Strukt + ?Sized>(
    recursive_option: RecursiveOption,
) -> Result<Vec<Field>, StructError> {
    fields(FieldsInput::of::<T>(recursive_option))
}

fn walk(
    info: &'static StructInfo,
    option: RecursiveOption,
    prefix: &[usize],
    visiting: &mut Vec<&'static str>,
    out: &mut Vec<Field>,
) {
    for (position, field) in info.fields.iter().enumerate() {
        let mut index = prefix.to_vec();
        index.push(position);

        if field.embedded && option != RecursiveOption::None {
            if let Some(inner) = embedded_struct((field.shape)()) {
                let expand = match option {
                    RecursiveOption::Embedded => true,
                    RecursiveOption::EmbeddedNoTag => field.raw_tag.is_empty(),
                    RecursiveOption::None => unreachable!(),
                };
                // A struct already on the walk stack would recurse forever
                // (self-embedding through Option<Box<Self>>); report it as
                // an ordinary field instead.
                if expand && !visiting.contains(&inner.signature) {
                    visiting.push(inner.signature);
                    walk(inner, option, &index, visiting, out);
                    visiting.pop();
                    continue;
                }
            }
        }

        out.push(Field::new(field, index));
    }
}
