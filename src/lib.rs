//! Record festival participants, their performances and judge scores,
//! then rank the best-scored performances.

pub mod config;
pub mod menu;
pub mod output;
pub mod scoring;
pub mod store;
