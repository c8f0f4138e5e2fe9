//! Unidirectional data flow engine for a country list.
//!
//! Intents become actions, actions are resolved asynchronously into
//! results, and results are reduced into one immutable view state.

pub mod config;
pub mod countries;
pub mod logging;
pub mod mvi;
pub mod repository;
