//! Rule-based introvert/extrovert classification behind the personality quiz.
//!
//! The crate is split into the pure [`scoring`] engine, the [`quiz`] domain
//! model (question catalog and session state machine), and the [`server`]
//! boundary that exposes both over HTTP.

pub mod config;
pub mod error;
pub mod quiz;
pub mod scoring;
pub mod server;
