//! Request and response shapes for the customer endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::customer::{Customer, CustomerPatch, NewCustomer, UpdateCustomer};

/// Checks the `^\+?[0-9]{10,20}$` phone contract without a regex engine.
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (10..=20).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone"))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body accepted by POST (create) and PUT (full update).
pub struct CustomerForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 500, message = "Address too long"))]
    pub address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body accepted by PATCH. Every field optional; absent fields are left
/// unchanged on the record.
pub struct CustomerPatchForm {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub full_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(length(max = 500, message = "Address too long"))]
    pub address: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
/// Read-only projection returned by every endpoint.
pub struct CustomerResponse {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            status: customer.status,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

impl From<&CustomerForm> for NewCustomer {
    fn from(form: &CustomerForm) -> Self {
        NewCustomer::new(
            form.full_name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.address.clone(),
            form.status.clone(),
        )
    }
}

impl From<&CustomerForm> for UpdateCustomer {
    fn from(form: &CustomerForm) -> Self {
        UpdateCustomer::new(
            form.full_name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.address.clone(),
            form.status.clone(),
        )
    }
}

impl From<&CustomerPatchForm> for CustomerPatch {
    fn from(form: &CustomerPatchForm) -> Self {
        CustomerPatch {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            address: form.address.clone(),
            status: form.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_pattern_accepts_digits_with_optional_plus() {
        assert!(validate_phone("12025550100").is_ok());
        assert!(validate_phone("+12025550100").is_ok());
        assert!(validate_phone("123456789").is_err()); // too short
        assert!(validate_phone("+1202555010x").is_err());
        assert!(validate_phone("++12025550100").is_err());
    }

    #[test]
    fn form_validation_reports_bad_fields() {
        let form = CustomerForm {
            full_name: "A".to_string(),
            email: "not-an-email".to_string(),
            phone: Some("123".to_string()),
            address: None,
            status: None,
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("full_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn patch_form_validates_only_present_fields() {
        let form = CustomerPatchForm {
            status: Some("VIP".to_string()),
            ..CustomerPatchForm::default()
        };
        assert!(form.validate().is_ok());

        let form = CustomerPatchForm {
            email: Some("broken".to_string()),
            ..CustomerPatchForm::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn patch_form_maps_to_domain_patch() {
        let form = CustomerPatchForm {
            full_name: Some("Alice Jones".to_string()),
            ..CustomerPatchForm::default()
        };
        let patch: CustomerPatch = (&form).into();
        assert_eq!(patch.full_name.as_deref(), Some("Alice Jones"));
        assert!(patch.email.is_none());
        assert!(patch.phone.is_none());
    }
}
