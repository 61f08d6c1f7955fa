pub mod branches;
pub mod common;
pub mod config;
pub mod head;
