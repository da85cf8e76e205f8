extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Record,
    attributes(table, id, column, version, created_on, created_by, updated_on, updated_by, base)
)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match tablemap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
