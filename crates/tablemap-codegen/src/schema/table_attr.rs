/// `#[table = "name"]`, `#[table("name")]` or
/// `#[table(name = "name", schema = "s", catalog = "c")]`.
#[derive(Debug)]
pub(crate) struct TableAttr {
    pub(crate) name: syn::LitStr,
    pub(crate) schema: Option<syn::LitStr>,
    pub(crate) catalog: Option<syn::LitStr>,
}

impl TableAttr {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<TableAttr> {
        match &attr.meta {
            syn::Meta::NameValue(meta) => {
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) = &meta.value
                else {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "expected `table = \"table_name\"`",
                    ));
                };

                Ok(TableAttr {
                    name: lit.clone(),
                    schema: None,
                    catalog: None,
                })
            }
            syn::Meta::List(_) => Self::from_list(attr),
            syn::Meta::Path(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[table = \"table_name\"]` or `#[table(name = \"table_name\")]`",
            )),
        }
    }

    fn from_list(attr: &syn::Attribute) -> syn::Result<TableAttr> {
        let mut name = None;
        let mut schema = None;
        let mut catalog = None;

        // `#[table("orders")]`
        if let Ok(lit) = attr.parse_args::<syn::LitStr>() {
            return Ok(TableAttr {
                name: lit,
                schema,
                catalog,
            });
        }

        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("name") {
                &mut name
            } else if meta.path.is_ident("schema") {
                &mut schema
            } else if meta.path.is_ident("catalog") {
                &mut catalog
            } else {
                return Err(meta.error("expected `name`, `schema` or `catalog`"));
            };

            if slot.is_some() {
                return Err(meta.error("duplicate table argument"));
            }

            *slot = Some(meta.value()?.parse::<syn::LitStr>()?);
            Ok(())
        })?;

        let Some(name) = name else {
            return Err(syn::Error::new_spanned(attr, "#[table] requires a `name`"));
        };

        Ok(TableAttr {
            name,
            schema,
            catalog,
        })
    }
}
