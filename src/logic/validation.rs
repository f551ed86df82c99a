//! Form validation logic
//!
//! Synchronous field-level checks for the signup and new-listing forms.
//! Failures block submission; each failure carries the field it belongs to
//! so callers can render inline messages.

use crate::model::catalog::{Category, Condition};

/// A single inline validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Draft of a new listing collected from the posting form
#[derive(Debug, Clone, Default)]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    /// Raw price input, sanitized with [`sanitize_price_input`] at entry
    pub price: String,
    pub negotiable: bool,
}

/// Shape check for email addresses: something@something.something, no spaces
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let mut domain_parts = domain.rsplitn(2, '.');
    let (Some(tld), Some(host)) = (domain_parts.next(), domain_parts.next()) else {
        return false;
    };
    !tld.is_empty()
        && !host.is_empty()
        && !domain.contains(char::is_whitespace)
}

/// Password composition check; returns the first violated rule
pub fn password_error(password: &str) -> Option<String> {
    if password.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    None
}

/// Validate the signup form; empty result means submission may proceed
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let username = username.trim();
    if username.is_empty() {
        errors.push(FieldError::new("username", "Username is required"));
    } else if username.len() < 3 {
        errors.push(FieldError::new(
            "username",
            "Username must be at least 3 characters",
        ));
    }

    let email = email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address",
        ));
    }

    if password.trim().is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    } else if let Some(message) = password_error(password) {
        errors.push(FieldError {
            field: "password",
            message,
        });
    }

    if confirm_password.trim().is_empty() {
        errors.push(FieldError::new(
            "confirm_password",
            "Please confirm your password",
        ));
    } else if password != confirm_password {
        errors.push(FieldError::new("confirm_password", "Passwords do not match"));
    }

    errors
}

/// Strip a raw price entry down to digits and at most one decimal point
pub fn sanitize_price_input(raw: &str) -> String {
    let mut seen_point = false;
    raw.chars()
        .filter(|c| {
            if c.is_ascii_digit() {
                true
            } else if *c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                false
            }
        })
        .collect()
}

/// Parse a sanitized price entry into its numeric value
pub fn parse_price(sanitized: &str) -> Option<f64> {
    if sanitized.is_empty() || sanitized == "." {
        return None;
    }
    sanitized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate the new-listing form; empty result means submission may proceed
pub fn validate_listing(form: &ListingForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    } else if title.len() > 100 {
        errors.push(FieldError::new("title", "Title must be 100 characters or less"));
    }

    if form.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }

    if form.category.is_none() {
        errors.push(FieldError::new("category", "Please select a category"));
    }

    if form.condition.is_none() {
        errors.push(FieldError::new("condition", "Please select a condition"));
    }

    match parse_price(&sanitize_price_input(&form.price)) {
        Some(_) => {}
        None => errors.push(FieldError::new("price", "Please enter a valid price")),
    }

    errors
}
