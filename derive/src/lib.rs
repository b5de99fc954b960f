use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod sentence;

#[proc_macro_derive(Sentence, attributes(nmea))]
pub fn derive_sentence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match sentence::expand_sentence(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}
