//! Discovery of sibling modules and matching them against requirements.

pub mod plan;
pub mod scan;

pub use plan::{plan_replacements, Replacement};
pub use scan::{ancestor, find_modules, LocalModule};
