//! Error handling and schema validation utilities for repositories
//!
//! The original store enforced its schema on write; the equivalents here are
//! the unique indexes (mapped below) plus the field checks repositories run
//! before writing.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use murmur_core::entities::{MAX_BODY_LEN, MAX_TEXT_LEN};
use murmur_core::DomainError;
use validator::ValidateEmail;

/// Validate the email format the way the store schema did
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail)
    }
}

/// Validate thought text: non-empty and length-bounded
pub fn validate_text(text: &str) -> Result<(), DomainError> {
    validate_content(text, MAX_TEXT_LEN)
}

/// Validate reaction body: non-empty and length-bounded
pub fn validate_body(body: &str) -> Result<(), DomainError> {
    validate_content(body, MAX_BODY_LEN)
}

fn validate_content(content: &str, max: usize) -> Result<(), DomainError> {
    if content.is_empty() {
        return Err(DomainError::ValidationError(
            "content must not be empty".to_string(),
        ));
    }
    if content.chars().count() > max {
        return Err(DomainError::ContentTooLong { max });
    }
    Ok(())
}

/// Convert a driver error to DomainError
pub fn map_store_error(e: MongoError) -> DomainError {
    DomainError::StoreError(e.to_string())
}

/// Convert a write error, translating duplicate-key violations (code 11000)
/// into the matching uniqueness error
///
/// The violated index is identified from the server message, which names the
/// indexed field.
pub fn map_write_error(e: MongoError) -> DomainError {
    let duplicate = duplicate_key_message(&e).map(str::to_owned);

    match duplicate {
        Some(msg) if msg.contains("username") => DomainError::UsernameTaken,
        Some(msg) if msg.contains("email") => DomainError::EmailTaken,
        Some(msg) => DomainError::ValidationError(msg),
        None => map_store_error(e),
    }
}

/// Extract the server message of a duplicate-key failure, if that is what
/// this error is
///
/// Plain writes surface the violation as a write error; findAndModify
/// surfaces it as a command error. Both carry code 11000.
fn duplicate_key_message(e: &MongoError) -> Option<&str> {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000 => {
            Some(&write_error.message)
        }
        ErrorKind::Command(command_error) if command_error.code == 11000 => {
            Some(&command_error.message)
        }
        _ => None,
    }
}
