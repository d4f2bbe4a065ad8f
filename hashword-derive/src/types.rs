//! Type utilities for the derive macro.

/// Checks if a type is syntactically an `Option<...>`.
///
/// Recognizes `Option<T>`, `option::Option<T>`, `std::option::Option<T>`,
/// and `core::option::Option<T>`. The check is intentionally syntactic: a
/// type alias hiding the `Option` is treated as a plain string-like field,
/// matching how the generated code would fail to compile for it anyway.
pub(crate) fn is_option_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() {
        return false;
    }

    let segments: Vec<String> = path
        .path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    let names: Vec<&str> = segments.iter().map(String::as_str).collect();
    if !matches!(
        names.as_slice(),
        ["Option"] | ["option", "Option"] | ["std", "option", "Option"] | ["core", "option", "Option"]
    ) {
        return false;
    }

    // A bare `Option` with no type argument is not a usable field type
    path.path
        .segments
        .last()
        .is_some_and(|segment| matches!(segment.arguments, syn::PathArguments::AngleBracketed(_)))
}
