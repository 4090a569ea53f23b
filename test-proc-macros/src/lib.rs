/// Expands to the string literal unchanged, or fails the build when the
/// literal is not an address the lookup endpoint would accept.
#[cfg(feature = "email")]
#[proc_macro]
pub fn email(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    domain_type_compiletime_check::<validation::Email>(input)
}

#[allow(dead_code)]
fn domain_type_compiletime_check<T>(input: proc_macro::TokenStream) -> proc_macro::TokenStream
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let lit_str = syn::parse_macro_input!(input as syn::LitStr);
    let value = lit_str.value();

    if let Err(err) = T::from_str(&value) {
        return syn::Error::new(lit_str.span(), err)
            .to_compile_error()
            .into();
    }

    quote::quote! { #value }.into()
}
