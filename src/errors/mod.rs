//! Error types and error handling for the front end.
//!
//! This module defines the error type shared by the lexer and parser:
//!
//! - Error structure with source position information
//! - Specific error variants for the syntax failures the front end reports
//! - Error formatting and display functionality

pub mod errors;
