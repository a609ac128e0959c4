//! Enumeration derive macro implementation.
//!
//! Generates an `enumeta::Enumeration` impl listing every variant with its
//! name, plus a `OnceLock` holding the type's `Reflection`.
//!
//! # Note
//!
//! Generated code names the facade crate as `::enumeta`, so the derive is
//! meant to be used through `enumeta::Enumeration`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse_macro_input;

use crate::utils::{parse_options, parse_repr, validate_unit_enum, variant_name};

/// Main entry point for the Enumeration derive macro.
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    match derive_enumeration_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_enumeration_impl(input: &syn::DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let variants = validate_unit_enum(input, "Enumeration")?;
    let repr = parse_repr(input)?;
    let options = parse_options(&input.attrs)?;

    let members = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let member_name = variant_name(variant);
        quote! { (Self::#ident, #member_name) }
    });

    let prefix = options.prefix.map(|prefix| {
        quote! { const PREFIX: &'static str = #prefix; }
    });

    Ok(quote! {
        impl ::enumeta::Enumeration for #name {
            type Repr = #repr;

            const MEMBERS: &'static [(Self, &'static str)] = &[#(#members),*];

            #prefix

            #[inline]
            fn to_repr(self) -> #repr {
                self as #repr
            }

            fn reflection() -> &'static ::enumeta::Reflection<Self> {
                static REFLECTION: ::std::sync::OnceLock<::enumeta::Reflection<#name>> =
                    ::std::sync::OnceLock::new();
                REFLECTION.get_or_init(::enumeta::Reflection::new)
            }
        }
    })
}
