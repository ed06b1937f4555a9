pub mod backend;
pub mod bench;
pub mod conf;
pub mod core;
pub mod dataset;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
