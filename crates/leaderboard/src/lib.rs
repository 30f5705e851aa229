#![forbid(unsafe_code)]

pub mod bucket;
pub mod coerce;
pub mod error;
pub mod models;
pub mod ranking;
pub mod slug;
pub mod store;

pub use error::{Action, Error, ErrorKind};
pub use models::*;
