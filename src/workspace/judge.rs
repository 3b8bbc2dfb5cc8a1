pub mod client;
pub(crate) mod poll;
pub mod response;

pub use client::{Client, Credentials, Endpoint};
