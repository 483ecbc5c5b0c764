//! CLI infrastructure for the noughts terminal front end
//!
//! The binary is a thin presentation layer: it reads moves, renders boards
//! and reports results, while every game decision goes through the library.

pub mod commands;
pub mod config;
pub mod output;
