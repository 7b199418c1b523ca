//! Procedural macros for `storywire`.
//!
//! The [`WiredStory`] derive reads the `#[wired(...)]` attributes that play
//! the role of the marker/locations annotation pair: `configure` opts the
//! type in to externally wired configuration, and `locations(...)` names the
//! wiring documents the container is bootstrapped from, in declaration
//! order. A derive without any `#[wired]` attribute produces the all-default
//! implementation, meaning the type is not annotated.

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

mod parse;

use parse::WiredAttrs;

/// Derive macro for `storywire::WiredStory`.
///
/// ```ignore
/// #[derive(WiredStory)]
/// #[wired(configure, locations("wiring/configuration.toml"))]
/// struct Annotated;
/// ```
#[proc_macro_derive(WiredStory, attributes(wired))]
pub fn derive_wired_story(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let attrs = WiredAttrs::from_attributes(&input.attrs)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let configure = attrs.configure;
    let locations = attrs.locations.iter();
    Ok(quote! {
        impl #impl_generics ::storywire::WiredStory for #ident #ty_generics #where_clause {
            fn configure() -> bool {
                #configure
            }

            fn wiring_locations() -> &'static [&'static str] {
                &[#(#locations),*]
            }
        }
    })
}
