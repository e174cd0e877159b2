//! Token builders for the generated impls.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident};

/// One `FieldDescriptor::of::<T>("name")` expression per mapped field,
/// in declaration order.
pub(crate) fn field_descriptors(fields: &[Field], krate: &TokenStream) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field");
            let name = ident.to_string();
            let ty = &field.ty;
            quote! { #krate::FieldDescriptor::of::<#ty>(#name) }
        })
        .collect()
}

/// The `Mappable` and `FieldClass` impls for the deriving struct.
///
/// The descriptor lives in a `LazyLock` static so the field table is built
/// on first use and shared for the lifetime of the process. The nested
/// thunk hands out the `descriptor` function itself rather than a resolved
/// reference, which keeps self-referential field types from re-entering
/// the initialiser.
pub(crate) fn impls(ident: &Ident, krate: &TokenStream, descriptors: &[TokenStream]) -> TokenStream {
    let type_name = ident.to_string();
    quote! {
        impl #krate::Mappable for #ident {
            fn descriptor() -> &'static #krate::TypeDescriptor {
                static DESCRIPTOR: ::std::sync::LazyLock<#krate::TypeDescriptor> =
                    ::std::sync::LazyLock::new(|| {
                        #krate::TypeDescriptor::of::<#ident>(
                            #type_name,
                            ::std::vec![#(#descriptors),*],
                        )
                    });
                &DESCRIPTOR
            }
        }

        impl #krate::FieldClass for #ident {
            const KIND: #krate::FieldKind = #krate::FieldKind::Complex;

            fn nested() -> ::core::option::Option<#krate::DescriptorThunk> {
                ::core::option::Option::Some(<#ident as #krate::Mappable>::descriptor)
            }
        }
    }
}
