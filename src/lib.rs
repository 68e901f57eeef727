pub mod config;
pub mod device;
pub mod kernels;
pub mod report;
pub mod validation;
