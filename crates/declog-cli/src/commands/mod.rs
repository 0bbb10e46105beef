pub mod add;
pub mod clear;
pub mod edit;
pub mod init;
pub mod lifecycle;
pub mod list;
pub mod show;
pub mod stats;
