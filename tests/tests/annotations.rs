use tests::prelude::*;

use pretty_assertions::assert_eq;

#[derive(Debug, Default, Record)]
struct NoTable {
    #[id]
    id: Option<i64>,
}

#[derive(Debug, Default, Record)]
#[table = "  "]
struct BlankTable {
    #[id]
    id: Option<i64>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct NoId {
    #[column]
    status: Option<String>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct PrimitiveId {
    #[id]
    order_id: i64,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct TwoIds {
    #[id]
    order_id: Option<i64>,

    #[id]
    #[column("version")]
    other_id: Option<i64>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct TwoVersions {
    #[id]
    order_id: Option<i64>,

    #[version]
    version: Option<i32>,

    #[version]
    #[column("status")]
    status_version: Option<i32>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct ConflictingRoles {
    #[id]
    order_id: Option<i64>,

    #[created_on]
    #[updated_on]
    #[column("created_on")]
    stamp: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct TextVersion {
    #[id]
    order_id: Option<i64>,

    #[version]
    version: Option<String>,
}

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct MissingColumn {
    #[id]
    order_id: Option<i64>,

    #[column("shipped_dt")]
    shipped: Option<chrono::NaiveDateTime>,
}

#[derive(Debug, Default, Record)]
#[table = "invoices"]
struct UnknownTable {
    #[id]
    id: Option<i64>,
}

#[derive(Debug, Default, Record)]
#[table(name = "orders", schema = "archive")]
struct UnknownSchema {
    #[id]
    order_id: Option<i64>,
}

async fn annotation_error<R: Record>(mapper: &Mapper) -> String {
    let err = assert_err!(mapper.load_mapping::<R>().await, is = is_annotation);
    err.to_string()
}

#[tokio::test]
async fn declaration_errors() {
    let (mapper, ops) = sqlite();

    assert_eq!(
        annotation_error::<NoTable>(&mapper).await,
        "NoTable does not have a #[table] declaration. It is required"
    );
    assert_eq!(
        annotation_error::<BlankTable>(&mapper).await,
        "for BlankTable the #[table] declaration has a blank name"
    );
    assert_eq!(
        annotation_error::<NoId>(&mapper).await,
        "#[id] not found in NoId"
    );
    assert_eq!(
        annotation_error::<PrimitiveId>(&mapper).await,
        "PrimitiveId.order_id is an id and cannot be a non-nullable type. Declare it as Option<i64>"
    );

    assert!(ops.is_empty());
    assert_eq!(mapper.cache_sizes().table_mappings, 0);
}

#[tokio::test]
async fn role_errors() {
    let (mapper, _ops) = sqlite();

    assert_eq!(
        annotation_error::<TwoIds>(&mapper).await,
        "TwoIds has multiple #[id] attributes"
    );
    assert_eq!(
        annotation_error::<TwoVersions>(&mapper).await,
        "TwoVersions has multiple #[version] attributes"
    );
    assert_eq!(
        annotation_error::<ConflictingRoles>(&mapper).await,
        "ConflictingRoles.stamp has multiple role attributes that conflict"
    );
    assert_eq!(
        annotation_error::<TextVersion>(&mapper).await,
        "#[version] requires the type of property TextVersion.version to be i32"
    );
}

#[tokio::test]
async fn catalog_errors() {
    let (mapper, _ops) = sqlite();

    assert_eq!(
        annotation_error::<MissingColumn>(&mapper).await,
        "shipped_dt column not found in table orders for property MissingColumn.shipped"
    );
    assert_eq!(
        annotation_error::<UnknownTable>(&mapper).await,
        "unable to locate metadata for table 'invoices' for UnknownTable"
    );
}

#[tokio::test]
async fn unknown_schema() {
    let (mapper, _ops) = sqlite();

    assert_eq!(
        annotation_error::<UnknownSchema>(&mapper).await,
        "unable to locate metadata for table 'orders' in schema archive for UnknownSchema"
    );
    assert_eq!(mapper.cache_sizes().table_mappings, 0);
}

#[tokio::test]
async fn failed_mappings_are_retried() {
    let (mapper, _ops) = sqlite();

    assert_err!(mapper.load_mapping::<MissingColumn>().await);
    assert_err!(mapper.load_mapping::<MissingColumn>().await);
    assert_ok!(mapper.load_mapping::<Order>().await);
    assert_eq!(mapper.cache_sizes().table_mappings, 1);
}

#[tokio::test]
async fn crud_surfaces_declaration_errors() {
    let (mapper, ops) = sqlite();

    let mut record = NoTable::default();
    assert_err!(mapper.insert(&mut record).await, is = is_annotation);
    assert_err!(mapper.find_by_id::<NoTable>(1).await, is = is_annotation);
    assert_err!(mapper.delete_by_id::<NoTable>(1).await, is = is_annotation);
    assert!(ops.is_empty());
}
