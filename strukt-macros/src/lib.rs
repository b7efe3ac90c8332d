use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedStruct;

/// Derive a static `Shape` description for a named-field struct.
///
/// Field attributes:
/// - `#[strukt(tag = r#"key:"value" ..."#)]` attaches a raw tag string.
/// - `#[strukt(embedded)]` marks the field as anonymously embedded, making
///   its own fields candidates for promotion when walkers recurse.
/// - `#[strukt(opaque)]` describes the field as an opaque scalar without
///   requiring its type to implement `Strukt`.
///
/// Only `pub` fields are described; the rest carry no externally resolvable
/// name and are skipped.
#[proc_macro_derive(Strukt, attributes(strukt))]
pub fn derive_strukt(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedStruct::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
