use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Data used when updating a [`Customer`] record. A full replacement of the
/// mutable columns: absent optionals are written as NULL.
pub struct UpdateCustomer<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub status: &'a str,
}

impl From<Customer> for DomainCustomer {
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

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            full_name: customer.full_name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_deref(),
            address: customer.address.as_deref(),
            status: customer.status.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            full_name: customer.full_name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_deref(),
            address: customer.address.as_deref(),
            status: customer.status.as_str(),
        }
    }
}
