pub mod is_zero;
pub mod quadratic;
pub mod root_set;
