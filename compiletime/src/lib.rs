use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Builds a `regex::Regex` from a string literal, rejecting invalid patterns
/// at compile time instead of at the first request.
///
/// The calling crate must depend on `regex`.
#[cfg(feature = "regex")]
#[proc_macro]
pub fn regex(input: TokenStream) -> TokenStream {
    let lit_str = parse_macro_input!(input as LitStr);
    let pattern = lit_str.value();

    if let Err(err) = regex::Regex::new(&pattern) {
        return syn::Error::new(lit_str.span(), err)
            .to_compile_error()
            .into();
    }

    quote! {
        ::regex::Regex::new(#pattern).expect("pattern checked by compiletime::regex!")
    }
    .into()
}
