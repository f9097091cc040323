use sea_orm_migration::prelude::*;

/// Millisecond-precision datetime column type for the backend in use
fn datetime_ms(manager: &SchemaManager<'_>) -> Alias {
    Alias::new(match manager.get_database_backend() {
        sea_orm::DatabaseBackend::MySql => "datetime(3)",
        sea_orm::DatabaseBackend::Postgres => "timestamp(3)",
        sea_orm::DatabaseBackend::Sqlite => "datetime",
    })
}

pub(crate) fn uuid_char<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(36).not_null().take()
}

pub(crate) fn uuid_char_null<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).char_len(36).null().take()
}

pub(crate) fn timestamp<T: IntoIden>(ident: T, manager: &SchemaManager<'_>) -> ColumnDef {
    ColumnDef::new(ident)
        .custom(datetime_ms(manager))
        .not_null()
        .take()
}

pub(crate) fn timestamp_null<T: IntoIden>(ident: T, manager: &SchemaManager<'_>) -> ColumnDef {
    ColumnDef::new(ident)
        .custom(datetime_ms(manager))
        .null()
        .take()
}

/// Currency amount stored in minor units (1/100)
pub(crate) fn minor_units<T: IntoIden>(ident: T) -> ColumnDef {
    ColumnDef::new(ident).big_integer().not_null().take()
}
