//! Classification of input rows against a mapping table.
//!
//! The resolver performs a left join: every input row survives, in order,
//! annotated as mapped (with its DRE code) or unmapped. Keys compare after
//! trimming and lowercasing, nothing more.

pub mod error;
pub mod resolver;

pub use error::{ResolveError, Result};
pub use resolver::{Resolution, resolve};
