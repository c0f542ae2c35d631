//! Classification of database errors.

/// Name of the unique constraint guarding `links.code`.
pub const CODE_UNIQUE_CONSTRAINT: &str = "links_code_key";

/// Returns true if the error is a unique violation on the short-code constraint.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(CODE_UNIQUE_CONSTRAINT))
}
