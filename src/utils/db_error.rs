/// Returns true if `e` is a uniqueness violation on `links.code`.
///
/// SQLite reports no constraint name, so the failing column is matched from
/// the driver message (`UNIQUE constraint failed: links.code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    match db_err.constraint() {
        Some(constraint) => constraint.contains("code"),
        None => db_err.message().contains("links.code"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_a_violation() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolTimedOut));
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
    }
}
