use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    db::DbPool,
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::{
        CustomerListQuery, CustomerReader, CustomerSearchCriteria, CustomerWriter, SortDirection,
        SortField, SortSpec, errors::RepositoryResult,
    },
};

/// Diesel implementation of [`CustomerReader`] and [`CustomerWriter`].
pub struct DieselCustomerRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCustomerRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

macro_rules! order_by {
    ($query:expr, $column:expr, $direction:expr) => {
        match $direction {
            SortDirection::Ascending => $query.order($column.asc()),
            SortDirection::Descending => $query.order($column.desc()),
        }
    };
}

fn apply_sort<'a>(
    query: crate::schema::customers::BoxedQuery<'a, Sqlite>,
    sort: &SortSpec,
) -> crate::schema::customers::BoxedQuery<'a, Sqlite> {
    use crate::schema::customers;

    match sort.field {
        SortField::Id => order_by!(query, customers::id, sort.direction),
        SortField::FullName => order_by!(query, customers::full_name, sort.direction),
        SortField::Email => order_by!(query, customers::email, sort.direction),
        SortField::Phone => order_by!(query, customers::phone, sort.direction),
        SortField::Address => order_by!(query, customers::address, sort.direction),
        SortField::Status => order_by!(query, customers::status, sort.direction),
        SortField::CreatedAt => order_by!(query, customers::created_at, sort.direction),
        SortField::UpdatedAt => order_by!(query, customers::updated_at, sort.direction),
    }
}

impl CustomerReader for DieselCustomerRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let customer = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let total = customers::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = customers::table.into_boxed::<Sqlite>();

        items = match &query.sort {
            Some(sort) => apply_sort(items, sort),
            None => items.order(customers::id.asc()),
        };

        if let Some(pagination) = &query.pagination {
            let offset = (pagination.page * pagination.per_page) as i64;
            items = items.offset(offset).limit(pagination.per_page as i64);
        }

        let items = items
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Customer>>();

        Ok((total, items))
    }

    fn search(&self, keyword: &str) -> RepositoryResult<Vec<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        // SQLite LIKE is case-insensitive for ASCII.
        let pattern = format!("%{keyword}%");

        let items = customers::table
            .filter(
                customers::full_name
                    .like(&pattern)
                    .or(customers::email.like(&pattern)),
            )
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn list_by_status(&self, status: &str) -> RepositoryResult<Vec<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let items = customers::table
            .filter(customers::status.eq(status))
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn advanced_search(
        &self,
        criteria: &CustomerSearchCriteria,
    ) -> RepositoryResult<Vec<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let mut items = customers::table.into_boxed::<Sqlite>();

        if let Some(name) = &criteria.name {
            items = items.filter(customers::full_name.like(format!("%{name}%")));
        }
        if let Some(email) = &criteria.email {
            items = items.filter(customers::email.like(format!("%{email}%")));
        }
        if let Some(status) = &criteria.status {
            items = items.filter(customers::status.eq(status.clone()));
        }

        let items = items
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CustomerWriter for DieselCustomerRepository<'_> {
    fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let insertable: DbNewCustomer = new_customer.into();

        let created = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateCustomer = updates.into();

        let updated = diesel::update(customers::table.find(customer_id))
            .set((&db_updates, customers::updated_at.eq(diesel::dsl::now)))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let affected = diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;
        if affected == 0 {
            return Err(crate::repository::errors::RepositoryError::NotFound);
        }
        Ok(())
    }
}
