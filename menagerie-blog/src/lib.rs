//! Menagerie blog generator.
//!
//! Derives per-animal rankings from a static dataset of user records and
//! composes them into one static page: a heading per distinct animal, with
//! up to ten of the highest-scoring active lovers of that animal beneath it.

pub mod assets;
pub mod cli;
pub mod config;
pub mod derive;
pub mod page;
