//! Attribute parsing and input validation for the derive.

use syn::{
    ext::IdentExt, punctuated::Punctuated, token::Comma, Attribute, Data, DeriveInput, Fields,
    Ident, LitStr, Variant,
};

/// Integer types accepted in `#[repr(..)]`.
const INTEGER_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Options from `#[enumeta(..)]` on the enum.
#[derive(Default)]
pub struct EnumOptions {
    pub prefix: Option<LitStr>,
}

/// Validate that the input is a non-generic enum of unit variants.
pub fn validate_unit_enum<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Variant, Comma>> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!("{macro_name} derive only supports enums"),
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            format!("{macro_name} derive does not support generic enums"),
        ));
    }

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("{macro_name} derive only supports variants without fields"),
            ));
        }
    }

    Ok(&data.variants)
}

/// The integer type named in `#[repr(..)]`, or `isize` if there is none.
pub fn parse_repr(input: &DeriveInput) -> syn::Result<Ident> {
    let mut repr = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Ok(());
            };
            let text = ident.to_string();
            if INTEGER_REPRS.contains(&text.as_str()) {
                repr = Some(ident.clone());
            } else if text == "i128" || text == "u128" {
                return Err(meta.error(format!("`repr({text})` is not supported")));
            } else if meta.input.peek(syn::token::Paren) {
                // align(N), packed(N)
                let _: proc_macro2::Group = meta.input.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("isize", proc_macro2::Span::call_site())))
}

/// Parse `#[enumeta(prefix = "...")]`.
pub fn parse_options(attrs: &[Attribute]) -> syn::Result<EnumOptions> {
    let mut options = EnumOptions::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("enumeta")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("prefix") {
                options.prefix = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unknown enumeta option, expected `prefix`"))
            }
        })?;
    }
    Ok(options)
}

/// Member name of a variant, without any `r#` marker.
pub fn variant_name(variant: &Variant) -> LitStr {
    LitStr::new(&variant.ident.unraw().to_string(), variant.ident.span())
}
