//! Selection of the `#[password]`-marked field.
//!
//! This module maps the field marker to an accessor target and produces
//! structured errors for invalid forms.

use proc_macro2::Ident;
use syn::{spanned::Spanned, Attribute, DataStruct, Fields, Meta, Result};

use crate::types::is_option_type;

/// The field the generated accessor pair reads and writes.
#[derive(Debug)]
pub(crate) struct PasswordFieldTarget {
    /// Identifier of the marked field.
    pub(crate) ident: Ident,
    /// Whether the field is an `Option` and can express absence.
    pub(crate) optional: bool,
}

/// Finds the single `#[password]`-marked field of a struct.
pub(crate) fn select_password_field(
    name: &Ident,
    data: DataStruct,
) -> Result<PasswordFieldTarget> {
    let fields = match data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(
                fields.span(),
                "`PasswordRecord` requires named fields; tuple structs are not supported",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                name.span(),
                "`PasswordRecord` cannot be derived for unit structs",
            ));
        }
    };

    let mut target: Option<PasswordFieldTarget> = None;
    for field in fields.named {
        if !has_password_marker(&field.attrs)? {
            continue;
        }
        let ident = field
            .ident
            .clone()
            .expect("named field should have an identifier");
        if target.is_some() {
            return Err(syn::Error::new(
                ident.span(),
                "multiple #[password] fields on the same struct; exactly one is allowed",
            ));
        }
        target = Some(PasswordFieldTarget {
            ident,
            optional: is_option_type(&field.ty),
        });
    }

    target.ok_or_else(|| {
        syn::Error::new(
            name.span(),
            "no field marked with #[password]; exactly one is required",
        )
    })
}

/// Parses the `#[password]` marker on one field.
fn has_password_marker(attrs: &[Attribute]) -> Result<bool> {
    let mut found = false;
    for attr in attrs {
        if !attr.path().is_ident("password") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                if found {
                    return Err(syn::Error::new(
                        attr.span(),
                        "duplicate #[password] attribute on the same field",
                    ));
                }
                found = true;
            }
            Meta::List(_) | Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "#[password] does not take arguments",
                ));
            }
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::{Data, DeriveInput};

    use super::*;

    fn parse_struct(tokens: proc_macro2::TokenStream) -> (Ident, DataStruct) {
        let input: DeriveInput = syn::parse2(tokens).expect("should parse as DeriveInput");
        match input.data {
            Data::Struct(data) => (input.ident, data),
            _ => panic!("expected a struct"),
        }
    }

    #[test]
    fn marked_field_is_selected() {
        let (name, data) = parse_struct(quote! {
            struct User {
                name: String,
                #[password]
                password: String,
            }
        });
        let target = select_password_field(&name, data).unwrap();
        assert_eq!(target.ident, "password");
        assert!(!target.optional);
    }

    #[test]
    fn optional_field_is_detected() {
        let (name, data) = parse_struct(quote! {
            struct User {
                #[password]
                password: Option<String>,
            }
        });
        let target = select_password_field(&name, data).unwrap();
        assert!(target.optional);
    }

    #[test]
    fn marker_may_sit_on_any_field_name() {
        let (name, data) = parse_struct(quote! {
            struct User {
                #[password]
                secret: String,
                password: String,
            }
        });
        let target = select_password_field(&name, data).unwrap();
        assert_eq!(target.ident, "secret");
    }

    #[test]
    fn missing_marker_errors() {
        let (name, data) = parse_struct(quote! {
            struct User {
                password: String,
            }
        });
        let err = select_password_field(&name, data).unwrap_err();
        assert!(err.to_string().contains("no field marked with #[password]"));
    }

    #[test]
    fn multiple_marked_fields_error() {
        let (name, data) = parse_struct(quote! {
            struct User {
                #[password]
                password: String,
                #[password]
                secret: String,
            }
        });
        let err = select_password_field(&name, data).unwrap_err();
        assert!(err.to_string().contains("multiple #[password] fields"));
    }

    #[test]
    fn marker_arguments_error() {
        let (name, data) = parse_struct(quote! {
            struct User {
                #[password(field = "secret")]
                password: String,
            }
        });
        let err = select_password_field(&name, data).unwrap_err();
        assert!(err.to_string().contains("does not take arguments"));
    }

    #[test]
    fn tuple_struct_errors() {
        let (name, data) = parse_struct(quote! {
            struct User(#[password] String);
        });
        let err = select_password_field(&name, data).unwrap_err();
        assert!(err.to_string().contains("tuple structs are not supported"));
    }

    #[test]
    fn other_attributes_are_ignored() {
        let (name, data) = parse_struct(quote! {
            struct User {
                #[serde(skip)]
                token: String,
                #[password]
                password: String,
            }
        });
        let target = select_password_field(&name, data).unwrap();
        assert_eq!(target.ident, "password");
    }
}
