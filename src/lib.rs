pub mod cli;
pub mod domain;
pub mod errors;
pub mod http;
pub mod prelude;
pub mod store;
