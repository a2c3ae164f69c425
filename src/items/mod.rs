// items - the request/validate/authorize/mutate pipeline for user-owned items.
//
// Flow: loose request params -> normalizer -> ItemRequest -> validator
// (invoked by the manager) -> store lookup + ownership check -> staged
// mutation. The surrounding HTTP handler commits the unit of work.

pub mod error;
pub mod manager;
pub mod normalizer;
pub mod request;
pub mod validator;

pub use error::ItemError;
pub use manager::ItemManager;
pub use request::ItemRequest;
