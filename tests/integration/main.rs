//! Integration test harness for the ecsx binary.

mod cli_tests;
