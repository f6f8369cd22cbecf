use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status assigned to customers created without an explicit status.
pub const DEFAULT_STATUS: &str = "ACTIVE";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: status
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: String,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        address: Option<String>,
        status: Option<String>,
    ) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: status
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

/// Sparse patch applied by the PATCH endpoints.
///
/// A `None` field means "leave unchanged", never "clear to null". Values are
/// kept as supplied so that a present-but-empty string stays distinct from an
/// absent field.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CustomerPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<String>,
}

impl CustomerPatch {
    /// Merges the patch over the current record, field by field.
    ///
    /// Produces the full update to persist: each supplied field overwrites
    /// the current value, each absent field carries the current value over.
    #[must_use]
    pub fn apply_to(&self, current: &Customer) -> UpdateCustomer {
        UpdateCustomer {
            full_name: self
                .full_name
                .clone()
                .unwrap_or_else(|| current.full_name.clone()),
            email: self
                .email
                .as_ref()
                .map(|s| s.to_lowercase().trim().to_string())
                .unwrap_or_else(|| current.email.clone()),
            phone: self.phone.clone().or_else(|| current.phone.clone()),
            address: self.address.clone().or_else(|| current.address.clone()),
            status: self.status.clone().unwrap_or_else(|| current.status.clone()),
        }
    }

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.status.is_none()
    }
}
