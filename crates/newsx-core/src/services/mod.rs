//! Services - one method per endpoint operation.
//!
//! Services own validation and the not-found policy; repositories only
//! translate to store queries.

mod blogs;
mod users;

pub use blogs::BlogService;
pub use users::UserService;
