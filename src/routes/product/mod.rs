pub mod add;
pub mod edit;
pub mod get;

pub use add::*;
pub use edit::*;
pub use get::*;
