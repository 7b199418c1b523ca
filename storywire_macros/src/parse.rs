//! Parsing of the `#[wired(...)]` derive attributes.

use syn::{Attribute, LitStr, Token, punctuated::Punctuated};

/// Values collected from every `#[wired(...)]` attribute on a type.
///
/// Attributes may be split (`#[wired(configure)]` plus
/// `#[wired(locations(...))]`) or combined in a single list; repeated
/// `locations` lists are concatenated in source order.
#[derive(Default, Debug)]
pub(crate) struct WiredAttrs {
    pub(crate) configure: bool,
    pub(crate) locations: Vec<LitStr>,
}

impl WiredAttrs {
    pub(crate) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("wired") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("configure") {
                    parsed.configure = true;
                    Ok(())
                } else if meta.path.is_ident("locations") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let literals = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                    parsed.locations.extend(literals);
                    Ok(())
                } else {
                    Err(meta.error("expected `configure` or `locations(...)`"))
                }
            })?;
        }
        Ok(parsed)
    }
}
