//! One query module per table.
//!
//! State collections expose `replace_all` + `get_all`; append-only logs
//! expose `append` + `get_all`.

pub mod dietary_restrictions;
pub mod family_members;
pub mod leftovers;
pub mod metrics;
pub mod products;
pub mod prohibited_dishes;
pub mod recommendations;
pub mod weekly_menu;
