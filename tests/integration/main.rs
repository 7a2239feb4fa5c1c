mod common;
mod config;
mod schedule;
mod shell;
