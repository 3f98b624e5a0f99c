//! User directory service: registration, lookup, profile updates and removal
//! of users, exposed as a JSON REST API over PostgreSQL.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
