
/// Main memory array.
pub mod memory;
