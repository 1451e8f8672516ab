//! TestRail API model types.

mod case_type;
mod priority;
mod project;
mod status;
mod template;
mod user;

pub use case_type::*;
pub use priority::*;
pub use project::*;
pub use status::*;
pub use template::*;
pub use user::*;
