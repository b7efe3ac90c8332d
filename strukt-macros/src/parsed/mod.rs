mod field;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitStr, Result};

use field::ParsedField;

pub(crate) struct ParsedStruct {
    name: Ident,
    fields: Vec<ParsedField>,
}

impl ParsedStruct {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new(
                input.ident.span(),
                "Strukt cannot be derived for generic types; a shape describes one concrete type",
            ));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named
                    .named
                    .iter()
                    .map(ParsedField::from_field)
                    .collect::<Result<Vec<_>>>()?,
                Fields::Unit => Vec::new(),
                Fields::Unnamed(_) => {
                    return Err(Error::new(
                        input.ident.span(),
                        "Strukt requires named fields",
                    ));
                }
            },
            _ => {
                return Err(Error::new(
                    input.ident.span(),
                    "Strukt can only be derived for structs",
                ));
            }
        };

        Ok(Self {
            name: input.ident.clone(),
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let name_lit = LitStr::new(&self.name.to_string(), Span::call_site());
        let field_inits: Vec<_> = self
            .fields
            .iter()
            .filter(|field| field.exported())
            .map(|field| field.to_info_tokens())
            .collect();

        quote! {
            #[automatically_derived]
            impl ::strukt::Strukt for #name {
                const SHAPE: ::strukt::Shape = ::strukt::Shape {
                    kind: ::strukt::Kind::Struct(&::strukt::StructInfo {
                        signature: ::core::concat!(::core::module_path!(), "::", #name_lit),
                        name: #name_lit,
                        fields: &[#(#field_inits),*],
                    }),
                };
            }
        }
    }
}
