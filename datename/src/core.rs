pub mod transform;
pub mod walker;
