//! End-to-end runs of the nukit binary against fake build tools.
#![cfg(unix)]

mod clean_tests;
mod common;
