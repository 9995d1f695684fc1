//! # altsort
//!
//! Generates a requested number of arrays with pairwise distinct random lengths, fills them with
//! random integers, and sorts each one ascending or descending depending on the parity of its
//! 1-based position.
//!
//! The components can be used one by one, or chained by [`Pipeline`].
#![deny(missing_docs)]

pub mod collection;
pub mod config;
pub mod errors;
pub mod generator;
pub mod input;
pub mod pipeline;
pub mod printer;
pub mod sizes;
pub mod sorter;


pub use collection::ArrayCollection;
pub use config::SizeStrategy;
pub use errors::{AltsortError, Result};
pub use pipeline::Pipeline;
