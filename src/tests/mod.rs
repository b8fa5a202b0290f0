//! Cross-module KSUID tests

pub mod test_utils;
