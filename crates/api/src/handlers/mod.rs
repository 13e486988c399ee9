pub mod carriers;
pub mod common;
pub mod health;
pub mod loads;
pub mod negotiations;

pub use carriers::get_carrier;
pub use health::health;
pub use loads::{get_load, search_loads};
pub use negotiations::{get_negotiations, post_negotiations};
