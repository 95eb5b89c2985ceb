//! Scoreboard API - backend for head-to-head game results
//!
//! This crate provides the REST API for:
//! - Registering players
//! - Recording game results under a fixed set of game types
//! - Player and game-type leaderboards derived on every read

pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
