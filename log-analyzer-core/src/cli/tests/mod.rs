#![cfg(test)]

mod check_tests;
