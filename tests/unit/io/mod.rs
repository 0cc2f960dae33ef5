//! Unit tests for the command line, export, logging and error types

mod cli;
