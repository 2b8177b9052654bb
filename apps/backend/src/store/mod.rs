//! Process-local storage.

pub mod object_id;
pub mod users;

pub use object_id::ObjectId;
pub use users::{EmailTaken, User, UserStore, UserUpdate};
