use std::str::FromStr;

use thiserror::Error;

use crate::{
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Page request carried by list queries. `page` is 0-indexed.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Columns the customer list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    FullName,
    Email,
    Phone,
    Address,
    Status,
    CreatedAt,
    UpdatedAt,
}

/// Raised when a sort parameter names a column that does not exist.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort field: {0}")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "fullName" | "full_name" => Ok(Self::FullName),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "address" => Ok(Self::Address),
            "status" => Ok(Self::Status),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively; anything else is ascending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    pub pagination: Option<Pagination>,
    pub sort: Option<SortSpec>,
}

impl CustomerListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    #[must_use]
    pub fn sort(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { field, direction });
        self
    }
}

/// Conjunctive filter for the advanced search: every supplied criterion must
/// hold, absent criteria do not filter.
#[derive(Debug, Clone, Default)]
pub struct CustomerSearchCriteria {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl CustomerSearchCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.status.is_none()
    }
}

pub trait CustomerReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
    fn search(&self, keyword: &str) -> RepositoryResult<Vec<Customer>>;
    fn list_by_status(&self, status: &str) -> RepositoryResult<Vec<Customer>>;
    fn advanced_search(
        &self,
        criteria: &CustomerSearchCriteria,
    ) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    fn delete(&self, customer_id: i32) -> RepositoryResult<()>;
}
