//! State Management
//!
//! The shared entry store and its browser local storage backend.

pub mod global;
pub mod storage;
