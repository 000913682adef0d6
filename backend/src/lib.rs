pub mod bridge;
pub mod cli;
