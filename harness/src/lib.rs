//! Drives the same insert / read / erase sequence against guarded collections from
//! many threads and against the plain container from one thread.

mod config;
mod config_option;
mod report;
mod workload;

pub use self::{config::*, config_option::*, report::*, workload::*};
