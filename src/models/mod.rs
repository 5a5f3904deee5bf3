pub mod user;
pub mod user_id;

pub use user::*;
pub use user_id::*;
