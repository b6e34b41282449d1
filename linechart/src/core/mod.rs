//! A module contain the data-structures and utilities that are shared by the
//! other modules.

pub mod color;
pub mod error;
pub mod utils;
