// Library exports for testing
// The binary (main.rs) imports these as well

pub mod app;
pub mod banner;
pub mod cli;
pub mod error;
pub mod logger;
pub mod notes;
pub mod render;

#[cfg(test)]
mod tests;
