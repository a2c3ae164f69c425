mod session;

pub use session::{login, register};
