pub mod completion;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod pull;
pub mod push;
pub mod set;
pub mod unset;

pub use completion::completion;
pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use pull::pull;
pub use push::push;
pub use set::{parse_assignments, set};
pub use unset::unset;
