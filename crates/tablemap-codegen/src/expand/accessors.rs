use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the per-type accessor table: one getter and setter per mapped
    /// field, followed by the projected accessors of `#[base]` records.
    pub(super) fn expand_accessors(&self) -> TokenStream {
        let tm = &self.tm;
        let ident = &self.record.ident;

        let fields = self.record.fields.iter().map(|field| {
            let name = field.ident.to_string();
            let field_ident = &field.ident;
            let ty = &field.ty;

            quote! {
                accessors.field(
                    #name,
                    |record: &#ident| <#ty as #tm::Primitive>::to_value(&record.#field_ident),
                    |record: &mut #ident, value: #tm::Value| {
                        record.#field_ident = <#ty as #tm::Primitive>::load(value)?;
                        Ok(())
                    },
                );
            }
        });

        let bases = self.record.bases.iter().map(|base| {
            let base_ident = &base.ident;
            let ty = &base.ty;

            quote! {
                accessors.base(
                    <#ty as #tm::Record>::accessors(),
                    |record: &#ident| &record.#base_ident,
                    |record: &mut #ident| &mut record.#base_ident,
                );
            }
        });

        quote! {
            let mut accessors = #tm::Accessors::<#ident>::new();
            #( #fields )*
            #( #bases )*
            accessors
        }
    }
}
