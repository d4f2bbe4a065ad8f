//! Derive macro for `hashword`.
//!
//! This crate generates the accessor pair behind `#[derive(PasswordRecord)]`.
//! It:
//! - locates the single field marked `#[password]`
//! - emits a `PasswordRecord` implementation reading and writing that field
//!
//! It does **not** decide when hashing happens. Policy lives in the main
//! `hashword` crate and runs when the lifecycle hooks fire.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod field;
mod types;
use field::{select_password_field, PasswordFieldTarget};

/// Derives `hashword::PasswordRecord` for a named-field struct.
///
/// # Field Attributes
///
/// - `#[password]`: marks the password attribute. Exactly one field must
///   carry the marker, and the marker takes no arguments.
///
/// # Supported field types
///
/// - `Option<T>` where `T: AsRef<str> + From<String>`: the accessor reports
///   `None` while the field is `None`, so a patch payload can distinguish
///   an absent password from an empty one.
/// - Any other `T: AsRef<str> + From<String>` (typically `String`): the
///   accessor always reports a value; an empty string stands for "no
///   password".
///
/// Enums, unions, and tuple or unit structs are rejected at compile time.
#[proc_macro_derive(PasswordRecord, attributes(password))]
pub fn derive_password_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the hashword crate root.
///
/// Handles crate renaming (e.g., `my_hw = { package = "hashword", ... }`)
/// and internal usage (when the derive is used inside hashword itself,
/// where the self-alias makes the plain name resolve).
fn crate_root() -> TokenStream {
    match crate_name("hashword") {
        Ok(FoundCrate::Itself) => quote! { hashword },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::hashword },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let data = match data {
        Data::Struct(data) => data,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span(),
                "`PasswordRecord` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`PasswordRecord` cannot be derived for unions",
            ));
        }
    };

    let PasswordFieldTarget {
        ident: field_ident,
        optional,
    } = select_password_field(&ident, data)?;

    let crate_root = crate_root();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let getter = if optional {
        quote! {
            self.#field_ident
                .as_ref()
                .map(|value| ::core::convert::AsRef::<str>::as_ref(value))
        }
    } else {
        quote! {
            ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&self.#field_ident))
        }
    };
    let setter = if optional {
        quote! {
            self.#field_ident =
                ::core::option::Option::Some(::core::convert::From::from(digest));
        }
    } else {
        quote! {
            self.#field_ident = ::core::convert::From::from(digest);
        }
    };

    Ok(quote! {
        impl #impl_generics #crate_root::PasswordRecord for #ident #ty_generics #where_clause {
            fn password(&self) -> ::core::option::Option<&str> {
                #getter
            }

            fn set_password(&mut self, digest: ::std::string::String) {
                #setter
            }
        }
    })
}
