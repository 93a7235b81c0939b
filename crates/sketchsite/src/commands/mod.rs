pub mod build;
pub mod tutorials;
