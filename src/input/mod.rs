//! Input processing module
//! Handles file detection, record loading and batch discovery

pub mod file_detector;
pub mod manager;

pub use manager::InputManager;
