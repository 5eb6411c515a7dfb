#![cfg(test)]

mod extract_tests;
mod finalize_tests;
mod rank_tests;
