//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait plus
//! field name constants for building queries without string typos.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    spanned::Spanned, Data, DeriveInput, Error, Fields, GenericArgument, PathArguments, Result,
    Type,
};

use super::attrs::{parse_record_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

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
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut field_names: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attr = parse_record_attrs(&field.attrs)?;

        // #[record(skip)] and unannotated fields stay out of the query surface
        if attr.skip {
            continue;
        }
        let kind = match attr.kind {
            Some(kind) => kind,
            None => {
                if attr.rename.is_some() {
                    return Err(Error::new(
                        attr.span,
                        "rename requires a field kind: text, number, or date",
                    ));
                }
                continue;
            }
        };

        // Determine the query field name
        let query_name = attr.rename.unwrap_or_else(|| field_name.to_string());

        // Generate constant name (SCREAMING_SNAKE_CASE)
        let const_name = format_ident!("{}", to_screaming_snake_case(&query_name));

        field_constants.push(quote! {
            /// Field name constant for building queries.
            pub const #const_name: &'static str = #query_name;
        });
        field_names.push(query_name.clone());

        // Option<T> fields of any kind read as Missing when None
        let value_expr = match (kind, option_inner(&field.ty)) {
            (FieldKind::Text, None) => {
                quote! { ::listwise::Value::Text(&self.#field_name) }
            }
            (FieldKind::Text, Some(_)) => {
                quote! {
                    match &self.#field_name {
                        ::core::option::Option::Some(inner) => ::listwise::Value::Text(inner),
                        ::core::option::Option::None => ::listwise::Value::Missing,
                    }
                }
            }
            (FieldKind::Number, None) => {
                quote! { ::listwise::Value::Number(::listwise::Number::from(self.#field_name)) }
            }
            (FieldKind::Number, Some(_)) => {
                quote! {
                    match &self.#field_name {
                        ::core::option::Option::Some(inner) => {
                            ::listwise::Value::Number(::listwise::Number::from(*inner))
                        }
                        ::core::option::Option::None => ::listwise::Value::Missing,
                    }
                }
            }
            (FieldKind::Date, None) => {
                quote! {
                    ::listwise::Value::Date(::listwise::AsDate::as_date(&self.#field_name))
                }
            }
            (FieldKind::Date, Some(_)) => {
                quote! {
                    match &self.#field_name {
                        ::core::option::Option::Some(inner) => {
                            ::listwise::Value::Date(::listwise::AsDate::as_date(inner))
                        }
                        ::core::option::Option::None => ::listwise::Value::Missing,
                    }
                }
            }
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    // Generate the impl block
    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*

            /// Every queryable field name, in declaration order.
            pub const FIELD_NAMES: &'static [&'static str] = &[#(#field_names),*];
        }

        impl ::listwise::Record for #struct_name {
            fn field_value(&self, field: &str) -> ::listwise::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::listwise::Value::Missing,
                }
            }
        }
    };

    Ok(expanded)
}

/// Returns the inner type of an `Option<T>`, or None for any other type.
fn option_inner(ty: &Type) -> Option<&Type> {
    let type_path = match ty {
        Type::Path(p) if p.qself.is_none() => p,
        _ => return None,
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = true;
        }
    }

    result
}
