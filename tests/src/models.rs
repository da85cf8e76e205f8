//! Records shared by the integration tests. The matching tables are created
//! by [`crate::setup::SCHEMA`].

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use tablemap::Record;

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "orders"]
pub struct Order {
    #[id(auto)]
    pub order_id: Option<i64>,

    #[column("order_dt")]
    pub order_date: Option<NaiveDateTime>,

    #[column]
    pub customer_name: Option<String>,

    #[column]
    pub status: Option<String>,

    #[version]
    pub version: Option<i32>,

    #[created_on]
    pub created_on: Option<NaiveDateTime>,

    #[created_by]
    pub created_by: Option<String>,

    #[updated_on]
    pub updated_on: Option<NaiveDateTime>,

    #[updated_by]
    pub updated_by: Option<String>,

    /// Not mapped
    pub scratch: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table(name = "product", schema = "main")]
pub struct Product {
    #[id]
    pub product_id: Option<i32>,

    #[column]
    pub name: Option<String>,

    #[column]
    pub cost: Option<f64>,

    #[column(type = clob)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct CreateAudit {
    #[created_on]
    pub created_on: Option<NaiveDateTime>,

    #[created_by]
    pub created_by: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "customer"]
pub struct Customer {
    #[id(auto)]
    pub id: Option<i64>,

    #[column]
    pub first_name: Option<String>,

    #[column]
    pub last_name: Option<String>,

    #[base]
    pub audit: CreateAudit,
}

/// Generated keys come back as 64-bit integers.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "small_key"]
pub struct SmallKey {
    #[id(auto)]
    pub id: Option<i32>,

    #[column]
    pub label: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
#[table = "event"]
pub struct Event {
    #[id]
    pub id: Option<String>,

    #[column]
    pub name: Option<String>,

    #[column]
    pub happened_at: Option<DateTime<FixedOffset>>,
}
