use tablemap_core::{stmt::Value, Error, Result};

use std::sync::OnceLock;

type Supplier = Box<dyn Fn() -> Value + Send + Sync>;

/// Suppliers for `#[created_on]`/`#[updated_on]` and
/// `#[created_by]`/`#[updated_by]` values. Each is set at most once.
#[derive(Default)]
pub(crate) struct AuditSuppliers {
    on: OnceLock<Supplier>,
    by: OnceLock<Supplier>,
}

impl AuditSuppliers {
    pub(crate) fn set_on(&self, supplier: Supplier) -> Result<()> {
        self.on
            .set(supplier)
            .map_err(|_| Error::mapper("the created/updated on supplier was already set"))
    }

    pub(crate) fn set_by(&self, supplier: Supplier) -> Result<()> {
        self.by
            .set(supplier)
            .map_err(|_| Error::mapper("the created/updated by supplier was already set"))
    }

    /// The current timestamp-like value, if a supplier is installed.
    pub(crate) fn on(&self) -> Option<Value> {
        self.on.get().map(|supplier| supplier())
    }

    /// The current principal, if a supplier is installed.
    pub(crate) fn by(&self) -> Option<Value> {
        self.by.get().map(|supplier| supplier())
    }
}

impl std::fmt::Debug for AuditSuppliers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditSuppliers")
            .field("on", &self.on.get().is_some())
            .field("by", &self.by.get().is_some())
            .finish()
    }
}
