use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::spanned::Spanned;
use syn::{Error, Field, Ident, LitStr, Result, Type, Visibility};

pub(crate) struct ParsedField {
    ident: Ident,
    ty: Type,
    raw_tag: Option<String>,
    embedded: bool,
    opaque: bool,
    exported: bool,
}

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "Strukt requires named fields"))?;

        let exported = matches!(field.vis, Visibility::Public(_));
        let mut raw_tag: Option<String> = None;
        let mut embedded = false;
        let mut opaque = false;

        for attr in &field.attrs {
            if !attr.path().is_ident("strukt") {
                continue;
            }
            if !exported {
                return Err(Error::new(
                    attr.span(),
                    "#[strukt] attributes have no effect on non-public fields; \
                     non-public fields are never described",
                ));
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("tag") {
                    if raw_tag.is_some() {
                        return Err(meta.error("field already carries a #[strukt(tag)]"));
                    }
                    let value: LitStr = meta.value()?.parse()?;
                    raw_tag = Some(value.value());
                } else if meta.path.is_ident("embedded") {
                    if embedded {
                        return Err(meta.error("field already marked as #[strukt(embedded)]"));
                    }
                    embedded = true;
                } else if meta.path.is_ident("opaque") {
                    if opaque {
                        return Err(meta.error("field already marked as #[strukt(opaque)]"));
                    }
                    opaque = true;
                } else {
                    let path = meta.path.to_token_stream().to_string();
                    return Err(meta.error(format!(
                        "unknown strukt option `{path}`, expected `tag`, `embedded`, or `opaque`"
                    )));
                }
                Ok(())
            })?;
        }

        if embedded && opaque {
            return Err(Error::new(
                ident.span(),
                "#[strukt(opaque)] hides the field's struct shape, so it cannot be embedded",
            ));
        }

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            raw_tag,
            embedded,
            opaque,
            exported,
        })
    }

    pub(crate) fn exported(&self) -> bool {
        self.exported
    }

    pub(crate) fn to_info_tokens(&self) -> TokenStream2 {
        let name_lit = LitStr::new(&self.ident.to_string(), Span::call_site());
        let tag_lit = LitStr::new(self.raw_tag.as_deref().unwrap_or(""), Span::call_site());
        let embedded = self.embedded;
        let shape = if self.opaque {
            quote! { ::strukt::opaque_shape }
        } else {
            let ty = &self.ty;
            quote! { <#ty as ::strukt::Strukt>::shape }
        };

        quote! {
            ::strukt::FieldInfo {
                name: #name_lit,
                raw_tag: #tag_lit,
                embedded: #embedded,
                shape: #shape,
            }
        }
    }
}
