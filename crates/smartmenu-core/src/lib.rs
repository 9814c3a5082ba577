//! Core library for the SmartMenu sign-in screen.
//!
//! Holds everything that does not depend on a terminal:
//! - `config`: `config.toml` loading and the theme palette
//! - `logging`: tracing subscriber setup
//! - `login`: the form controller, its validation rules and the session
//!   that executes its effects

pub mod config;
pub mod logging;
pub mod login;
