pub mod auth;
pub mod client;
pub mod employee;
pub mod product;
pub mod request;
pub mod user;
