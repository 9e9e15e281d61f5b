use crate::domain::{
    article::ArticleField,
    errors::DomainError,
    validation::{ValidationErrors, Violation},
};
use sqlx::error::ErrorKind;

const NOT_NULL_FAILED: &str = "NOT NULL constraint failed: ";
const ARTICLES_TABLE: &str = "articles.";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            let not_null = matches!(db_err.kind(), ErrorKind::NotNullViolation)
                || message.starts_with(NOT_NULL_FAILED);

            // `author` is NOT NULL in the schema; surface it like a presence failure.
            if not_null {
                if let Some(field) = not_null_column(message) {
                    return DomainError::Validation(ValidationErrors::single(
                        field.as_str(),
                        Violation::Blank,
                    ));
                }
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn not_null_column(message: &str) -> Option<ArticleField> {
    message
        .strip_prefix(NOT_NULL_FAILED)?
        .strip_prefix(ARTICLES_TABLE)
        .and_then(ArticleField::parse)
}
