mod accessors;
mod descriptor;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for tablemap types
    tm: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let tm = &self.tm;
        let ident = &self.record.ident;
        let descriptor = self.expand_descriptor();
        let accessors = self.expand_accessors();

        wrap_in_const(quote! {
            impl #tm::Record for #ident {
                fn descriptor() -> &'static #tm::RecordDescriptor {
                    static DESCRIPTOR: #tm::OnceLock<#tm::RecordDescriptor> = #tm::OnceLock::new();
                    DESCRIPTOR.get_or_init(|| { #descriptor })
                }

                fn accessors() -> &'static #tm::Accessors<Self> {
                    static ACCESSORS: #tm::OnceLock<#tm::Accessors<#ident>> = #tm::OnceLock::new();
                    ACCESSORS.get_or_init(|| { #accessors })
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        tm: quote!(_tablemap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tablemap as _tablemap;
            #code
        };
    }
}
