//! Repository traits (ports)

pub mod customer_repository;

pub use customer_repository::CustomerRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
