pub mod cli;
pub mod convert;
pub mod engine;
pub mod interactive;
pub mod utils;
