pub mod concepts;
pub mod hierarchy;

pub use concepts::extract_key_concepts;
pub use hierarchy::organize_hierarchy;
