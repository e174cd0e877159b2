//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[mappable(crate = "...")]` attribute value into
//! the tokens that replace hardcoded `litemapper::` paths in generated
//! code. The crate's own unit tests lean on this with `crate = "crate"`.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `litemapper` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { litemapper }, |path| quote! { #path })
}
