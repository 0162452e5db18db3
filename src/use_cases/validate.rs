use email_address::EmailAddress;

use crate::domain::entities::{BadgeRequest, ContactSubmission};
use crate::domain::errors::{BadgeError, FieldError};

// Raw badge fields as they arrive on the wire, before validation.
#[derive(Debug, Default)]
pub struct BadgeInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub photo_url: Option<String>,
}

// Raw contact fields as they arrive on the wire, before validation.
#[derive(Debug, Default)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

// Validates the badge input. The email must be present and satisfy the
// address grammar; name and photo pass through untouched.
pub fn validate_badge_input(input: BadgeInput) -> Result<BadgeRequest, BadgeError> {
    let email = match input.email {
        Some(email) if !email.trim().is_empty() => email,
        _ => {
            return Err(BadgeError::Validation(vec![FieldError::new(
                "email",
                "email is required",
            )]));
        }
    };

    if !EmailAddress::is_valid(&email) {
        return Err(BadgeError::Validation(vec![FieldError::new(
            "email",
            "email must be a valid email address",
        )]));
    }

    Ok(BadgeRequest {
        email,
        name: input.name,
        photo_url: input.photo_url,
    })
}

// Validates the contact input. Every field is required and non-empty; all
// violations are collected so the client sees the full list at once.
pub fn validate_contact_input(input: ContactInput) -> Result<ContactSubmission, BadgeError> {
    let mut errors = Vec::new();

    let name = required_field(input.name, "name", &mut errors);
    let email = required_field(input.email, "email", &mut errors);
    let subject = required_field(input.subject, "subject", &mut errors);
    let message = required_field(input.message, "message", &mut errors);

    if !errors.is_empty() {
        return Err(BadgeError::Validation(errors));
    }

    Ok(ContactSubmission {
        name,
        email,
        subject,
        message,
    })
}

fn required_field(value: Option<String>, field: &str, errors: &mut Vec<FieldError>) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            errors.push(FieldError::new(field, &format!("{field} is required")));
            String::new()
        }
    }
}
