pub mod backup;
pub mod config;
pub mod days;
pub mod db;
pub mod init;
pub mod inventory;
pub mod log;
pub mod notebook;
pub mod recipe;
pub mod shop;
pub mod todo;
