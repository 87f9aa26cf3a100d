pub mod cache;
pub mod config;
pub mod fetch;
pub mod init;
pub mod show;
