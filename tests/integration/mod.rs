//! Integration tests for the macro bundler

mod bundle_scenarios;
mod cli_exit_codes;
