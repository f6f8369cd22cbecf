//! Customer operations over the repository traits.
//!
//! The partial-update merge and the search criteria normalization live here;
//! everything else translates straight into repository calls.

use crate::domain::customer::{Customer, CustomerPatch, NewCustomer, UpdateCustomer};
use crate::pagination::Page;
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerSearchCriteria, CustomerWriter, SortDirection,
    SortField, SortSpec,
};
use crate::services::{ServiceError, ServiceResult};

fn parse_sort(sort_by: &str, sort_dir: &str) -> ServiceResult<SortSpec> {
    let field: SortField = sort_by
        .parse()
        .map_err(|_| ServiceError::InvalidSortField(sort_by.to_string()))?;
    Ok(SortSpec {
        field,
        direction: SortDirection::parse(sort_dir),
    })
}

/// Fetches a customer by its identifier.
pub fn get_customer_by_id<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_by_id(customer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Returns one page of customers, optionally ordered by `sort_by`/`sort_dir`.
pub fn list_customers<R>(
    repo: &R,
    page: usize,
    size: usize,
    sort_by: Option<&str>,
    sort_dir: &str,
) -> ServiceResult<Page<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let mut query = CustomerListQuery::new().paginate(page, size);

    if let Some(sort_by) = sort_by.map(str::trim).filter(|s| !s.is_empty()) {
        let sort = parse_sort(sort_by, sort_dir)?;
        query = query.sort(sort.field, sort.direction);
    }

    let (total, items) = repo.list(query).map_err(ServiceError::from)?;
    Ok(Page::new(items, page, size, total))
}

/// Returns the whole customer list ordered by `sort_by`/`sort_dir`.
pub fn list_customers_sorted<R>(
    repo: &R,
    sort_by: &str,
    sort_dir: &str,
) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let sort = parse_sort(sort_by, sort_dir)?;
    let query = CustomerListQuery::new().sort(sort.field, sort.direction);

    let (_total, items) = repo.list(query).map_err(ServiceError::from)?;
    Ok(items)
}

/// Persists a new customer, returning it with its server-assigned id.
pub fn create_customer<R>(repo: &R, new_customer: &NewCustomer) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.create(new_customer).map_err(ServiceError::from)
}

/// Overwrites every mutable field of an existing customer.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    updates: &UpdateCustomer,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.update(customer_id, updates).map_err(ServiceError::from)
}

/// Applies a sparse patch to an existing customer.
///
/// Reads the current record, overwrites only the fields the patch supplies
/// and persists the merged result: one read plus one write. A patch with no
/// fields set is a legal no-op write.
pub fn partial_update_customer<R>(
    repo: &R,
    customer_id: i32,
    patch: &CustomerPatch,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let current = repo
        .get_by_id(customer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let merged = patch.apply_to(&current);
    repo.update(customer_id, &merged).map_err(ServiceError::from)
}

/// Removes a customer.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete(customer_id).map_err(ServiceError::from)
}

/// Case-insensitive substring match on name OR email.
pub fn search_customers<R>(repo: &R, keyword: &str) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.search(keyword.trim()).map_err(ServiceError::from)
}

/// Exact-match filter on status. Unknown statuses yield an empty list.
pub fn get_customers_by_status<R>(repo: &R, status: &str) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_by_status(status).map_err(ServiceError::from)
}

/// Conjunctive multi-criteria search. Blank parameters count as absent; with
/// no criteria at all this is equivalent to listing every customer.
pub fn advanced_search<R>(
    repo: &R,
    name: Option<&str>,
    email: Option<&str>,
    status: Option<&str>,
) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let mut criteria = CustomerSearchCriteria::new();

    if let Some(name) = name.map(str::trim).filter(|s| !s.is_empty()) {
        criteria = criteria.name(name);
    }
    if let Some(email) = email.map(str::trim).filter(|s| !s.is_empty()) {
        criteria = criteria.email(email);
    }
    if let Some(status) = status.map(str::trim).filter(|s| !s.is_empty()) {
        criteria = criteria.status(status);
    }

    repo.advanced_search(&criteria).map_err(ServiceError::from)
}
