use super::{Column, ErrorSet};

/// A field mapped to a column.
#[derive(Debug)]
pub(crate) struct Field {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,

    /// `#[column(...)]`
    pub(crate) column: Option<Column>,

    /// Role attributes, in the order they were written
    pub(crate) roles: Vec<Role>,

    /// `#[id(auto)]`
    pub(crate) auto: bool,
}

/// A `#[base]` field embedding another record.
#[derive(Debug)]
pub(crate) struct Base {
    pub(crate) ident: syn::Ident,
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Id,
    Version,
    CreatedOn,
    CreatedBy,
    UpdatedOn,
    UpdatedBy,
}

/// How a struct field takes part in the mapping.
pub(super) enum FieldKind {
    Mapped(Field),
    Base(Base),
    Unmapped,
}

impl Role {
    const ALL: [(&'static str, Role); 6] = [
        ("id", Role::Id),
        ("version", Role::Version),
        ("created_on", Role::CreatedOn),
        ("created_by", Role::CreatedBy),
        ("updated_on", Role::UpdatedOn),
        ("updated_by", Role::UpdatedBy),
    ];

    fn from_attr(attr: &syn::Attribute) -> Option<Role> {
        Role::ALL
            .iter()
            .find(|(name, _)| attr.path().is_ident(name))
            .map(|(_, role)| *role)
    }

    pub(crate) fn variant(self) -> &'static str {
        match self {
            Role::Id => "Id",
            Role::Version => "Version",
            Role::CreatedOn => "CreatedOn",
            Role::CreatedBy => "CreatedBy",
            Role::UpdatedOn => "UpdatedOn",
            Role::UpdatedBy => "UpdatedBy",
        }
    }
}

impl FieldKind {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<FieldKind> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut roles = vec![];
        let mut auto = false;
        let mut base = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match Column::from_ast(attr) {
                        Ok(c) => column = Some(c),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("base") {
                base = Some(attr);
            } else if let Some(role) = Role::from_attr(attr) {
                if roles.contains(&role) {
                    errs.push(syn::Error::new_spanned(attr, "duplicate role attribute"));
                    continue;
                }

                if role == Role::Id {
                    match parse_id(attr) {
                        Ok(a) => auto = a,
                        Err(err) => errs.push(err),
                    }
                } else if !matches!(attr.meta, syn::Meta::Path(_)) {
                    errs.push(syn::Error::new_spanned(attr, "role attributes take no arguments"));
                }

                roles.push(role);
            }
        }

        if let Some(attr) = base {
            if column.is_some() || !roles.is_empty() {
                errs.push(syn::Error::new_spanned(
                    attr,
                    "#[base] fields cannot carry column or role attributes",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(if base.is_some() {
            FieldKind::Base(Base {
                ident: ident.clone(),
                ty: field.ty.clone(),
            })
        } else if column.is_some() || !roles.is_empty() {
            FieldKind::Mapped(Field {
                ident: ident.clone(),
                ty: field.ty.clone(),
                column,
                roles,
                auto,
            })
        } else {
            FieldKind::Unmapped
        })
    }
}

/// `#[id]` or `#[id(auto)]`; returns whether the id is generated.
fn parse_id(attr: &syn::Attribute) -> syn::Result<bool> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(false),
        _ => {
            let mut auto = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("auto") {
                    auto = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `auto`"))
                }
            })?;
            Ok(auto)
        }
    }
}
