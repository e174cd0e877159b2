//! Parsing of the derive input and its `#[mappable(...)]` attributes.

use syn::{Attribute, Data, DeriveInput, Field, Fields, Lit, LitStr};

/// Metadata parsed from struct-level `#[mappable(...)]` attributes.
#[derive(Default)]
pub(crate) struct StructAttrs {
    /// Override for the `litemapper` path in generated code.
    pub krate: Option<syn::Path>,
}

/// Metadata parsed from field-level `#[mappable(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttrs {
    /// Omit the field from the descriptor.
    pub skip: bool,
}

/// Iterate every `#[mappable(...)]` attribute once and apply a callback.
fn parse_mappable<F>(attrs: &[Attribute], mut callback: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta<'_>) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("mappable")) {
        attr.parse_nested_meta(|meta| callback(&meta))?;
    }
    Ok(())
}

/// Extract struct-level metadata. Unknown keys are rejected rather than
/// discarded so a typo never silently changes mapping behaviour.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_mappable(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let value = meta.value()?.parse::<Lit>()?;
            let Lit::Str(ref path) = value else {
                return Err(syn::Error::new_spanned(
                    &value,
                    "crate override must be a string literal",
                ));
            };
            out.krate = Some(parse_crate_path(path)?);
            Ok(())
        } else {
            Err(meta.error("unknown mappable attribute; expected `crate`"))
        }
    })?;
    Ok(out)
}

fn parse_crate_path(lit: &LitStr) -> syn::Result<syn::Path> {
    lit.parse::<syn::Path>()
        .map_err(|_| syn::Error::new_spanned(lit, "crate override must be a valid module path"))
}

/// Extract field-level metadata. As with struct attributes, unknown keys
/// fail the derive.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_mappable(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            Err(meta.error("unknown mappable attribute; expected `skip`"))
        }
    })?;
    Ok(out)
}

/// The named fields of the input, or an error for any other data shape.
pub(crate) fn named_fields(input: &DeriveInput) -> syn::Result<Vec<Field>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Ok(named.named.iter().cloned().collect()),
            Fields::Unnamed(_) | Fields::Unit => Err(syn::Error::new_spanned(
                &data.struct_token,
                "Mappable requires a struct with named fields",
            )),
        },
        Data::Enum(data) => Err(syn::Error::new_spanned(
            data.enum_token,
            "Mappable can only be derived for structs",
        )),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Mappable can only be derived for structs",
        )),
    }
}

/// Filter out `#[mappable(skip)]` fields, keeping declaration order.
pub(crate) fn mapped_fields(fields: &[Field]) -> syn::Result<Vec<Field>> {
    let mut kept = Vec::with_capacity(fields.len());
    for field in fields {
        if !parse_field_attrs(&field.attrs)?.skip {
            kept.push(field.clone());
        }
    }
    Ok(kept)
}
