// src/models.rs
pub mod rename_outcome;
pub mod walk_summary;

pub use rename_outcome::RenameOutcome;
pub use walk_summary::WalkSummary;
