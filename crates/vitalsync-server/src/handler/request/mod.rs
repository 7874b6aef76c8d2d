//! Request types for HTTP handlers.

mod chat;
mod goals;
mod users;

pub use chat::*;
pub use goals::*;
pub use users::*;
