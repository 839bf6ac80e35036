/// Returns true if `e` is a unique violation on the mapping code key.
///
/// SQLite reports primary key conflicts with the extended code
/// `SQLITE_CONSTRAINT_PRIMARYKEY` (1555) and unique index conflicts with
/// `SQLITE_CONSTRAINT_UNIQUE` (2067); both surface as unique violations.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("mappings.code")
}
