//! Version 1 endpoints: bare data and list responses.

use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};
use serde::Deserialize;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::customer::{CustomerPatch, NewCustomer, UpdateCustomer};
use crate::dto::customer::{CustomerForm, CustomerPatchForm, CustomerResponse};
use crate::dto::envelope::{CustomerPage, DeleteConfirmation, MSG_DELETED};
use crate::repository::customer::DieselCustomerRepository;
use crate::routes::{DEFAULT_PAGE_SIZE, error_response, validation_error_response};
use crate::services::customer as customer_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    page: Option<usize>,
    size: Option<usize>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedQueryParams {
    sort_by: Option<String>,
    sort_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQueryParams {
    keyword: String,
}

#[derive(Debug, Deserialize)]
pub struct AdvancedSearchParams {
    name: Option<String>,
    email: Option<String>,
    status: Option<String>,
}

#[get("/customers")]
pub async fn list_customers(
    params: web::Query<ListQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);
    let params = params.into_inner();

    let result = customer_service::list_customers(
        &repo,
        params.page.unwrap_or(0),
        params.size.unwrap_or(DEFAULT_PAGE_SIZE),
        params.sort_by.as_deref(),
        params.sort_dir.as_deref().unwrap_or("asc"),
    );

    match result {
        Ok(page) => HttpResponse::Ok().json(CustomerPage::from(page.map(CustomerResponse::from))),
        Err(e) => error_response("Failed to list customers", e),
    }
}

#[get("/customers/sorted")]
pub async fn list_customers_sorted(
    params: web::Query<SortedQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);
    let params = params.into_inner();

    let result = customer_service::list_customers_sorted(
        &repo,
        params.sort_by.as_deref().unwrap_or("id"),
        params.sort_dir.as_deref().unwrap_or("asc"),
    );

    match result {
        Ok(customers) => HttpResponse::Ok().json(
            customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response("Failed to list sorted customers", e),
    }
}

#[get("/customers/search")]
pub async fn search_customers(
    params: web::Query<SearchQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);

    match customer_service::search_customers(&repo, &params.keyword) {
        Ok(customers) => HttpResponse::Ok().json(
            customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response("Failed to search customers", e),
    }
}

#[get("/customers/status/{status}")]
pub async fn customers_by_status(
    status: web::Path<String>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);

    match customer_service::get_customers_by_status(&repo, &status) {
        Ok(customers) => HttpResponse::Ok().json(
            customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response("Failed to filter customers by status", e),
    }
}

#[get("/customers/advanced-search")]
pub async fn advanced_search(
    params: web::Query<AdvancedSearchParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);
    let params = params.into_inner();

    let result = customer_service::advanced_search(
        &repo,
        params.name.as_deref(),
        params.email.as_deref(),
        params.status.as_deref(),
    );

    match result {
        Ok(customers) => HttpResponse::Ok().json(
            customers
                .into_iter()
                .map(CustomerResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => error_response("Failed to run advanced search", e),
    }
}

#[get("/customers/{id}")]
pub async fn get_customer(customer_id: web::Path<i32>, pool: web::Data<DbPool>) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);

    match customer_service::get_customer_by_id(&repo, customer_id.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(e) => error_response("Failed to get customer", e),
    }
}

#[post("/customers")]
pub async fn create_customer(
    form: web::Json<CustomerForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error_response(&e);
    }

    let repo = DieselCustomerRepository::new(&pool);
    let new_customer = NewCustomer::from(&form.into_inner());

    match customer_service::create_customer(&repo, &new_customer) {
        Ok(customer) => HttpResponse::Created().json(CustomerResponse::from(customer)),
        Err(e) => error_response("Failed to create customer", e),
    }
}

#[put("/customers/{id}")]
pub async fn update_customer(
    customer_id: web::Path<i32>,
    form: web::Json<CustomerForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error_response(&e);
    }

    let repo = DieselCustomerRepository::new(&pool);
    let updates = UpdateCustomer::from(&form.into_inner());

    match customer_service::update_customer(&repo, customer_id.into_inner(), &updates) {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(e) => error_response("Failed to update customer", e),
    }
}

#[patch("/customers/{id}")]
pub async fn partial_update_customer(
    customer_id: web::Path<i32>,
    form: web::Json<CustomerPatchForm>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return validation_error_response(&e);
    }

    let repo = DieselCustomerRepository::new(&pool);
    let patch = CustomerPatch::from(&form.into_inner());

    match customer_service::partial_update_customer(&repo, customer_id.into_inner(), &patch) {
        Ok(customer) => HttpResponse::Ok().json(CustomerResponse::from(customer)),
        Err(e) => error_response("Failed to partially update customer", e),
    }
}

#[delete("/customers/{id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCustomerRepository::new(&pool);

    match customer_service::delete_customer(&repo, customer_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(DeleteConfirmation {
            message: MSG_DELETED,
        }),
        Err(e) => error_response("Failed to delete customer", e),
    }
}
