//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerSearchCriteria, CustomerWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
        fn search(&self, keyword: &str) -> RepositoryResult<Vec<Customer>>;
        fn list_by_status(&self, status: &str) -> RepositoryResult<Vec<Customer>>;
        fn advanced_search(
            &self,
            criteria: &CustomerSearchCriteria,
        ) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn create(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
        fn delete(&self, customer_id: i32) -> RepositoryResult<()>;
    }
}
