pub mod aggregate;
pub mod calibration;
pub mod classify;
pub mod config;
pub mod engine;
pub mod measure;
pub mod pose;
pub mod session;
