use proc_macro2::TokenStream;
use quote::quote;

#[derive(Debug, Default)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) ty: Option<ColumnType>,
}

/// A column type named in `#[column(type = ...)]`.
#[derive(Debug)]
pub(crate) struct ColumnType {
    /// Variant of `SqlType`
    pub(crate) variant: syn::Ident,
}

const COLUMN_TYPES: &[(&str, &str)] = &[
    ("boolean", "Boolean"),
    ("smallint", "SmallInt"),
    ("integer", "Integer"),
    ("bigint", "BigInt"),
    ("real", "Real"),
    ("double", "Double"),
    ("decimal", "Decimal"),
    ("char", "Char"),
    ("varchar", "Varchar"),
    ("text", "Text"),
    ("clob", "Clob"),
    ("binary", "Binary"),
    ("blob", "Blob"),
    ("date", "Date"),
    ("time", "Time"),
    ("timestamp", "Timestamp"),
    ("timestamp_tz", "TimestampWithTimeZone"),
    ("uuid", "Uuid"),
];

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            // Bare `#[column]` maps the field with the default column name.
            syn::Meta::Path(_) => Ok(Column::default()),
            _ => attr.parse_args(),
        }
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Column::default();

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(type = clob)]
        // #[column("name", type = clob)]
        // #[column(type = clob, "name")]
        while !input.is_empty() {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type]) {
                if result.ty.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column type"));
                }
                let _type_token: syn::Token![type] = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.ty = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

impl syn::parse::Parse for ColumnType {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let ident: syn::Ident = input.parse()?;
        let name = ident.to_string();

        let Some((_, variant)) = COLUMN_TYPES.iter().find(|(n, _)| *n == name) else {
            let expected = COLUMN_TYPES
                .iter()
                .map(|(n, _)| *n)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(syn::Error::new_spanned(
                &ident,
                format!("unknown column type `{name}`; expected one of {expected}"),
            ));
        };

        Ok(ColumnType {
            variant: syn::Ident::new(variant, ident.span()),
        })
    }
}

impl ColumnType {
    pub(crate) fn to_tokens(&self, tm: &TokenStream) -> TokenStream {
        let variant = &self.variant;
        quote!(#tm::SqlType::#variant)
    }
}
