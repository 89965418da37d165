// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::core::transform::{
    FALLBACK_STEM, MONTH_TOKENS, PREFIX_FORMAT, date_prefix, guard_reserved_name,
    is_reserved_name, normalize_stem, sanitize, split_extension, strip_months, transform,
};
pub use crate::core::walker::{FsRenamer, MAX_DEPTH, Renamer, rename_tree, walk};
pub use crate::models::{RenameOutcome, WalkSummary};
pub use crate::utils::{format_outcome, print_outcome, resolve_directory};
