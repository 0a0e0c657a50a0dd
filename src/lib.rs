pub mod args;
pub mod config;
pub mod day;
pub mod feedback;
pub mod logging;
pub mod matrix;
pub mod share;
pub mod stats;
pub mod ui;
