mod comment;
mod product;
mod record_id;
mod user;

pub use comment::*;
pub use product::*;
pub use record_id::*;
pub use user::*;
