//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates a `Node` impl advertising the record capability and a
//! `Record` impl that matches on the selected field name.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_record_attrs;

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut dynamic: Option<TokenStream> = None;
    let mut bounds: Vec<syn::WherePredicate> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_ty = &field.ty;

        let record_attrs = parse_record_attrs(&field.attrs)?;

        if record_attrs.skip {
            continue;
        }

        if record_attrs.dynamic {
            if dynamic.is_some() {
                return Err(Error::new(
                    field.span(),
                    "only one field can be marked #[record(dynamic)]",
                ));
            }
            bounds.push(parse_quote!(#field_ty: ::strider::Indexable));
            dynamic = Some(quote! {
                ::strider::Indexable::entry(&self.#field_name, ::strider::Key::Str(name))
            });
            continue;
        }

        // Strip the raw prefix so `r#type` is selected as `type`
        let selected_name = record_attrs.rename.unwrap_or_else(|| {
            let name = field_name.to_string();
            name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
        });

        if !seen.insert(selected_name.clone()) {
            return Err(Error::new(
                field.span(),
                format!("duplicate record field name: '{}'", selected_name),
            ));
        }

        bounds.push(parse_quote!(#field_ty: ::strider::Node));
        field_matches.push(quote! {
            #selected_name => ::core::option::Option::Some(&self.#field_name as &dyn ::strider::Node),
        });
    }

    let fallback = dynamic.unwrap_or_else(|| quote! { ::core::option::Option::None });

    // Field types only need bounds when they can mention type parameters
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::strider::Node for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn as_record(&self) -> ::core::option::Option<&dyn ::strider::Record> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::strider::Record for #struct_name #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn ::strider::Node> {
                match name {
                    #(#field_matches)*
                    _ => #fallback,
                }
            }
        }
    };

    Ok(expanded)
}
