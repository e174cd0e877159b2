//! Expansion pipeline for the `Mappable` derive.

mod build;
mod crate_path;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expand one `#[derive(Mappable)]` input into the trait impls.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    if let Some(param) = input.generics.params.first() {
        return Err(syn::Error::new_spanned(
            param,
            "Mappable cannot be derived for generic types",
        ));
    }

    let struct_attrs = parse::parse_struct_attrs(&input.attrs)?;
    let fields = parse::named_fields(input)?;
    let mapped = parse::mapped_fields(&fields)?;

    let krate = crate_path::resolve(struct_attrs.krate.as_ref());
    let descriptors = build::field_descriptors(&mapped, &krate);
    Ok(build::impls(&input.ident, &krate, &descriptors))
}
