//! Ringside core library — window handle, message dispatch, surfaces, and
//! configuration shared by the host harness binary.

pub mod config;
pub mod dispatch;
pub mod frames;
pub mod init;
pub mod sink;
pub mod surfaces;
pub mod window;
