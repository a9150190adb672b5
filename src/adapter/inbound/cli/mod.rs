//! CLI module graph.

pub mod check;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod download;
pub mod init;
pub mod operator;
pub mod output;
pub mod paths;
pub mod run;
pub mod scenes;
