pub mod catalog;
pub mod config;
pub mod error;
pub mod judge;
pub mod lang;
pub mod line;
pub mod notify;
pub mod report;
pub mod session;
pub mod solution;
pub mod solved;
pub(crate) mod text;
