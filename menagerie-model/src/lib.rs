//! Menagerie data representations.

pub mod dataset;
pub mod user;

pub use dataset::Dataset;
pub use user::{Name, User};
