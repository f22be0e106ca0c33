pub mod config;
pub mod logging;

pub mod exchange;
pub mod export;
pub mod har;
pub mod naming;
pub mod scan;
pub mod scope;
