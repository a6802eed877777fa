pub mod classify;
pub mod env;
pub mod output;
pub mod repair;
pub mod resolve;
pub mod validate;
