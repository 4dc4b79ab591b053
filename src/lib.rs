//! Batchscan core library.
//!
//! This library provides the command line interface definitions and the
//! pipeline that turns a flat Bazel target list into a batched
//! jar-scanner build script.

pub mod batch;
pub mod cli;
pub mod input;
pub mod runner;
pub mod script_gen;
pub mod target;
