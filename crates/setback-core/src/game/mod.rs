pub mod error;
pub mod hosted;
pub mod phase;
pub mod scoring;
pub mod session;
pub mod summary;
