// Re-export all API modules
pub mod feedback;
pub mod jury;
pub mod problems;
pub mod teams;
pub mod utils;
