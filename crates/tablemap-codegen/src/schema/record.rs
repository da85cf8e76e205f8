use super::{field::FieldKind, Base, ErrorSet, Field, TableAttr};

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// `#[table(...)]`, if declared
    pub(crate) table: Option<TableAttr>,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// `#[base]` fields, in declaration order
    pub(crate) bases: Vec<Base>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut table = None;
        let mut fields = vec![];
        let mut bases = vec![];

        for attr in &ast.attrs {
            if !attr.path().is_ident("table") {
                continue;
            }

            if table.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                continue;
            }

            match TableAttr::from_ast(attr) {
                Ok(attr) => table = Some(attr),
                Err(err) => errs.push(err),
            }
        }

        for field in &node.named {
            match FieldKind::from_ast(field) {
                Ok(FieldKind::Mapped(field)) => fields.push(field),
                Ok(FieldKind::Base(base)) => bases.push(base),
                Ok(FieldKind::Unmapped) => {}
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            table,
            fields,
            bases,
        })
    }
}
