pub mod manager;
pub mod models;
pub mod schema;
pub mod service;
pub mod store;
pub mod unit_of_work;

pub use manager::{DatabaseError, DatabaseManager};
pub use store::{ItemStore, PgItemStore};
pub use unit_of_work::{NewItem, StagedChange, UnitOfWork};
