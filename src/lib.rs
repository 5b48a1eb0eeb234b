pub mod args;
pub mod cli;
pub mod config;
pub mod exit_codes;
pub mod launch;
pub mod logging;
pub mod resolve;
