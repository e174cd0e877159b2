//! Procedural macros for `litemapper`.
//!
//! The [`Mappable`] derive generates the type's field descriptor table —
//! memoised in a `LazyLock` static so introspection is paid once per type —
//! together with the classification impl that marks the type complex and
//! nestable. The runtime half of the contract lives in the companion
//! `litemapper` crate.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `litemapper::Mappable`.
///
/// Applies to non-generic structs with named fields; anything else is a
/// compile error. Two attributes are recognised:
///
/// - `#[mappable(skip)]` on a field omits it from the descriptor entirely:
///   it never maps, never validates against rule selectors, and its type
///   needs no classification.
/// - `#[mappable(crate = "path")]` on the struct overrides the `litemapper`
///   path in generated code, for renamed or re-exported dependencies.
///
/// Field names are recorded verbatim, so structs whose serialised form uses
/// different names (serde `rename` attributes and the like) are outside the
/// mapper's contract.
#[proc_macro_derive(Mappable, attributes(mappable))]
pub fn derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
