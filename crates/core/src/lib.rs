//! Core library for numclass
//!
//! This crate is the **Functional Core** of the number classifier service.
//! Everything here is a pure function over plain data: no sockets, no HTTP
//! clients, no environment lookups. The `numclass` binary crate is the
//! Imperative Shell that reads configuration, serves HTTP and calls the
//! trivia provider, delegating every decision it can to this crate.
//!
//! # Module Organization
//!
//! - [`input`]: two-stage validation of the raw `number` query parameter
//! - [`classify`]: numeric predicates and the classification payload
//! - [`trivia`]: request URLs and response decoding for the trivia provider
//! - [`config`]: defaults and parsing helpers for runtime settings
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::{classify::classify, input::parse_number};
//!
//! let num = parse_number(Some("371")).unwrap();
//! let result = classify(num).with_fun_fact(serde_json::json!("371 is a fact."));
//!
//! assert_eq!(result.classification.digit_sum, 11);
//! assert!(!result.classification.is_prime);
//! ```

pub mod classify;
pub mod config;
pub mod input;
pub mod trivia;
