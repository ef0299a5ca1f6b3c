//! Payload validation
//!
//! Each entity that the client submits exposes a `validate()` method which
//! aggregates every failed rule into a single [`ValidationErrors`] value
//! keyed by field name. Validation runs before any network I/O purely to
//! avoid a round trip for malformed input; the server re-validates
//! regardless.
//!
//! Format rules (email, URL, date, mobile) skip absent or empty values.
//! Only the required rule rejects them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::types::{BankAccount, Bill, Collection, OpenCollection, SplitPayment};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Malaysian mobile numbers: country code 60, optional leading plus.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?60\d{8,10}$").expect("mobile pattern compiles"));

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("cannot be blank")]
    Required,

    #[error("the length must be between {min} and {max}")]
    Length { min: usize, max: usize },

    #[error("must be one of: {allowed}")]
    NotInSet { allowed: String },

    #[error("must be a valid email address")]
    Email,

    #[error("must be a valid URL")]
    Url,

    #[error("must be a date in YYYY-MM-DD format")]
    Date,

    #[error("must be a valid Malaysian mobile number")]
    Mobile,
}

/// Aggregated validation failures keyed by field name.
///
/// Errors from nested values (a collection's split payment) appear under a
/// dotted key such as `split_payment.email`. Fields iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, FieldError>,
}

impl ValidationErrors {
    fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.errors.insert(field.into(), error);
    }

    fn merge_nested(&mut self, prefix: &str, nested: Result<(), ValidationErrors>) {
        if let Err(nested) = nested {
            for (field, error) in nested.errors {
                self.insert(format!("{prefix}.{field}"), error);
            }
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Returns the failed rule for a field, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Names of all fields that failed validation, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (field, error)) in self.errors.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl Collection {
    /// Validates the collection for submission with a create call.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "title", &self.title);
        if let Some(split_payment) = &self.split_payment {
            errors.merge_nested("split_payment", split_payment.validate());
        }
        errors.into_result()
    }
}

impl OpenCollection {
    /// Validates the open collection for submission with a create call.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "title", &self.title);
        check_length(&mut errors, "title", &self.title, 1, 50);
        check_required(&mut errors, "description", &self.description);
        check_length(&mut errors, "description", &self.description, 1, 200);
        check_length(&mut errors, "reference_1_label", &self.reference_1_label, 0, 20);
        check_length(&mut errors, "reference_2_label", &self.reference_2_label, 0, 20);
        check_email(&mut errors, "email_link", &self.email_link);
        check_one_of(&mut errors, "payment_button", &self.payment_button, &["buy", "pay"]);
        if let Some(split_payment) = &self.split_payment {
            errors.merge_nested("split_payment", split_payment.validate());
        }
        errors.into_result()
    }
}

impl SplitPayment {
    /// Validates the split payment configuration.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_email(&mut errors, "email", &self.email);
        errors.into_result()
    }
}

impl Bill {
    /// Validates the bill for submission with a create call.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "collection_id", &self.collection_id);
        check_email(&mut errors, "email", &self.email);
        check_mobile(&mut errors, "mobile", &self.mobile);
        check_required(&mut errors, "name", &self.name);
        check_required_amount(&mut errors, "amount", self.amount);
        check_required(&mut errors, "callback_url", &self.callback_url);
        check_url(&mut errors, "callback_url", &self.callback_url);
        check_required(&mut errors, "description", &self.description);
        check_length(&mut errors, "description", &self.description, 1, 200);
        check_date(&mut errors, "due_at", &self.due_at);
        check_url(&mut errors, "redirect_url", &self.redirect_url);
        check_length(&mut errors, "reference_1_label", &self.reference_1_label, 0, 20);
        check_length(&mut errors, "reference_1", &self.reference_1, 0, 120);
        check_length(&mut errors, "reference_2_label", &self.reference_2_label, 0, 20);
        check_length(&mut errors, "reference_2", &self.reference_2, 0, 120);
        errors.into_result()
    }
}

impl BankAccount {
    /// Validates the bank account for submission to the verification service.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_required(&mut errors, "name", &self.name);
        check_required(&mut errors, "id_no", &self.id_number);
        check_required(&mut errors, "acc_no", &self.account_number);
        check_required(&mut errors, "code", &self.code);
        errors.into_result()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn check_required(errors: &mut ValidationErrors, field: &'static str, value: &Option<String>) {
    if present(value).is_none() {
        errors.insert(field, FieldError::Required);
    }
}

fn check_required_amount(errors: &mut ValidationErrors, field: &'static str, value: Option<u64>) {
    if value.unwrap_or(0) == 0 {
        errors.insert(field, FieldError::Required);
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<String>,
    min: usize,
    max: usize,
) {
    if let Some(value) = present(value) {
        let length = value.chars().count();
        if length < min || length > max {
            errors.insert(field, FieldError::Length { min, max });
        }
    }
}

fn check_one_of(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<String>,
    allowed: &'static [&'static str],
) {
    if let Some(value) = present(value) {
        if !allowed.contains(&value) {
            errors.insert(
                field,
                FieldError::NotInSet {
                    allowed: allowed.join(", "),
                },
            );
        }
    }
}

fn check_email(errors: &mut ValidationErrors, field: &'static str, value: &Option<String>) {
    if let Some(value) = present(value) {
        if !EMAIL_PATTERN.is_match(value) {
            errors.insert(field, FieldError::Email);
        }
    }
}

fn check_url(errors: &mut ValidationErrors, field: &'static str, value: &Option<String>) {
    if let Some(value) = present(value) {
        if Url::parse(value).is_err() {
            errors.insert(field, FieldError::Url);
        }
    }
}

fn check_date(errors: &mut ValidationErrors, field: &'static str, value: &Option<String>) {
    if let Some(value) = present(value) {
        if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            errors.insert(field, FieldError::Date);
        }
    }
}

fn check_mobile(errors: &mut ValidationErrors, field: &'static str, value: &Option<String>) {
    if let Some(value) = present(value) {
        if !MOBILE_PATTERN.is_match(value) {
            errors.insert(field, FieldError::Mobile);
        }
    }
}
