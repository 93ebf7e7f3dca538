pub mod backup;
pub mod config;
pub mod days;
pub mod export;
pub mod inventory;
pub mod log;
pub mod notebook;
pub mod recipe;
pub mod shopping;
pub mod todo;
