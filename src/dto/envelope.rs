//! Typed response envelopes.
//!
//! One struct per endpoint shape instead of a free-form map: the v1 paged
//! list and delete confirmation, and the v2 envelopes carrying the API
//! version tag, messages, links and counts.

use serde::Serialize;

use crate::dto::customer::CustomerResponse;
use crate::pagination::Page;

pub const API_VERSION_V2: &str = "v2";

pub const MSG_CREATED: &str = "Customer created successfully";
pub const MSG_UPDATED: &str = "Customer updated successfully";
pub const MSG_PATCHED: &str = "Customer partially updated successfully";
pub const MSG_DELETED: &str = "Customer deleted successfully";

/// HATEOAS-style links attached to v2 item responses.
#[derive(Debug, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub update: String,
    pub delete: String,
    pub collection: String,
}

impl ResourceLinks {
    #[must_use]
    pub fn for_customer(id: i32) -> Self {
        Self {
            self_link: format!("/api/v2/customers/{id}"),
            update: format!("/api/v2/customers/{id}"),
            delete: format!("/api/v2/customers/{id}"),
            collection: "/api/v2/customers".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v1 paged list body.
pub struct CustomerPage {
    pub customers: Vec<CustomerResponse>,
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl From<Page<CustomerResponse>> for CustomerPage {
    fn from(page: Page<CustomerResponse>) -> Self {
        Self {
            customers: page.items,
            current_page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v1 delete confirmation body.
pub struct DeleteConfirmation {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 paged list envelope.
pub struct PageEnvelope {
    pub api_version: &'static str,
    pub customers: Vec<CustomerResponse>,
    pub current_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<Page<CustomerResponse>> for PageEnvelope {
    fn from(page: Page<CustomerResponse>) -> Self {
        let has_next = page.has_next();
        let has_previous = page.has_previous();
        Self {
            api_version: API_VERSION_V2,
            current_page: page.page,
            total_items: page.total_items,
            total_pages: page.total_pages,
            page_size: page.page_size,
            has_next,
            has_previous,
            customers: page.items,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 single-item envelope; `message` appears on mutations only.
pub struct ItemEnvelope {
    pub api_version: &'static str,
    pub data: CustomerResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub links: ResourceLinks,
}

impl ItemEnvelope {
    #[must_use]
    pub fn new(data: CustomerResponse) -> Self {
        let links = ResourceLinks::for_customer(data.id);
        Self {
            api_version: API_VERSION_V2,
            data,
            message: None,
            links,
        }
    }

    #[must_use]
    pub fn with_message(data: CustomerResponse, message: &'static str) -> Self {
        let mut envelope = Self::new(data);
        envelope.message = Some(message);
        envelope
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 keyword search envelope.
pub struct SearchEnvelope {
    pub api_version: &'static str,
    pub keyword: String,
    pub count: usize,
    pub data: Vec<CustomerResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 status filter envelope.
pub struct StatusEnvelope {
    pub api_version: &'static str,
    pub status: String,
    pub count: usize,
    pub data: Vec<CustomerResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// Criteria echoed back by the v2 advanced search; absent criteria render
/// as empty strings.
pub struct SearchFilters {
    pub name: String,
    pub email: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 advanced search envelope.
pub struct AdvancedSearchEnvelope {
    pub api_version: &'static str,
    pub filters: SearchFilters,
    pub count: usize,
    pub data: Vec<CustomerResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
/// v2 delete envelope.
pub struct DeleteEnvelope {
    pub api_version: &'static str,
    pub message: &'static str,
    pub deleted_id: i32,
}
