//! Form submission flows
//!
//! Validation runs synchronously and blocks submission; only valid forms
//! reach the network. Server failures collapse to a generic error at the
//! caller (no server-side error mapping).

use anyhow::Result;

use crate::api::{LoginRequest, NewBook, SignupRequest};
use crate::logic::validation::{
    parse_price, sanitize_price_input, validate_listing, validate_signup, FieldError,
    ListingForm,
};

use super::App;

/// Result of a form submission attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted the submission
    Accepted,
    /// Field-level validation blocked the submission
    Rejected(Vec<FieldError>),
}

impl App {
    /// Validate and submit the signup form
    pub async fn submit_signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<SubmitOutcome> {
        let errors = validate_signup(username, email, password, confirm_password);
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let request = SignupRequest {
            name: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.client().signup(&request).await?;
        Ok(SubmitOutcome::Accepted)
    }

    /// Submit login credentials (both fields required, no other checks)
    pub async fn submit_login(&self, email: &str, password: &str) -> Result<SubmitOutcome> {
        let mut errors = Vec::new();
        if email.trim().is_empty() {
            errors.push(FieldError {
                field: "email",
                message: "Email is required".to_string(),
            });
        }
        if password.trim().is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Password is required".to_string(),
            });
        }
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.client().login(&request).await?;
        Ok(SubmitOutcome::Accepted)
    }

    /// Validate and post a new listing
    pub async fn submit_listing(&self, form: &ListingForm) -> Result<SubmitOutcome> {
        let errors = validate_listing(form);
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Rejected(errors));
        }

        // Validation guarantees these are present and parseable
        let price = parse_price(&sanitize_price_input(&form.price)).unwrap_or_default();
        let condition = form.condition.map(|c| c.as_str().to_string()).unwrap_or_default();
        let category = form.category.map(|c| c.as_str().to_string()).unwrap_or_default();

        let book = NewBook {
            title: form.title.trim().to_string(),
            description: form.description.trim().to_string(),
            price,
            condition,
            category,
            negotiable: form.negotiable,
        };
        self.client().add_book(&book).await?;
        Ok(SubmitOutcome::Accepted)
    }
}
