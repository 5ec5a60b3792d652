//! Configuration infrastructure module

mod file;

pub use file::FileConfigStore;
