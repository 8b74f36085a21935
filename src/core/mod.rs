pub mod cache;
pub mod calculator;
pub mod calendar;
pub mod config;
pub mod dashboard;
pub mod logic;
pub mod report;
