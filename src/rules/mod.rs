//! Move legality rules.

mod validator;

pub use validator::{can_land_on_column, can_land_on_foundation, is_complete};
