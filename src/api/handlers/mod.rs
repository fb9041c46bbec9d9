//! HTTP request handlers.

mod students;
mod system;

#[cfg(test)]
mod system_test;

pub use students::*;
pub use system::*;
