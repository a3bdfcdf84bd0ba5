/// JSON sample reader module.
pub mod json;
