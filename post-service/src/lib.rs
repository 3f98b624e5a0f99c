//! Post store service. Every post it returns is enriched with its author's
//! username and display name, looked up from the user service per request.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
