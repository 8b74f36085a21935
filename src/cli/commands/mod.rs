pub mod calendar;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod init;
pub mod report;
