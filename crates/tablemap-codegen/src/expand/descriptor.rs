use super::Expand;
use crate::schema::{Field, TableAttr};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the `RecordDescriptor` expression, merging in `#[base]`
    /// records after the record's own fields.
    pub(super) fn expand_descriptor(&self) -> TokenStream {
        let tm = &self.tm;
        let type_name = self.record.ident.to_string();
        let table = self.expand_table_attr();
        let fields = self.record.fields.iter().map(|field| self.expand_field(field));
        let bases = self.record.bases.iter().map(|base| {
            let ty = &base.ty;
            quote!(.with_base(<#ty as #tm::Record>::descriptor()))
        });

        quote! {
            #tm::RecordDescriptor {
                type_name: #type_name,
                table: #table,
                fields: vec![ #( #fields, )* ],
            }
            #( #bases )*
        }
    }

    fn expand_table_attr(&self) -> TokenStream {
        let tm = &self.tm;

        let Some(TableAttr {
            name,
            schema,
            catalog,
        }) = &self.record.table
        else {
            return quote!(None);
        };

        let schema = option_lit(schema.as_ref());
        let catalog = option_lit(catalog.as_ref());

        quote! {
            Some(#tm::TableAttr {
                name: #name,
                schema: #schema,
                catalog: #catalog,
            })
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let tm = &self.tm;
        let name = field.ident.to_string();
        let ty = &field.ty;
        let auto = field.auto;

        let column = match &field.column {
            Some(column) => {
                let name = option_lit(column.name.as_ref());
                let sql_type = match &column.ty {
                    Some(ty) => {
                        let ty = ty.to_tokens(tm);
                        quote!(Some(#ty))
                    }
                    None => quote!(None),
                };
                quote!(Some(#tm::ColumnAttr { name: #name, sql_type: #sql_type }))
            }
            None => quote!(None),
        };

        let roles = field.roles.iter().map(|role| {
            let variant = syn::Ident::new(role.variant(), field.ident.span());
            quote!(#tm::Role::#variant)
        });

        quote! {
            #tm::FieldDescriptor {
                name: #name,
                ty: <#ty as #tm::Primitive>::TYPE,
                nullable: <#ty as #tm::Primitive>::NULLABLE,
                column: #column,
                roles: vec![ #( #roles ),* ],
                auto_generated: #auto,
            }
        }
    }
}

fn option_lit(lit: Option<&syn::LitStr>) -> TokenStream {
    match lit {
        Some(lit) => quote!(Some(#lit)),
        None => quote!(None),
    }
}
