//! Interactive learning objects ("OVA") for introductory biostatistics and
//! epidemiology.
//!
//! The numeric core lives in [`stats`]; [`content`] holds the lessons,
//! exercises and quizzes; [`simulator`] and [`state`] are the UI-independent
//! handlers; [`ui`] and [`app`] draw everything with egui.

pub mod app;
pub mod chart;
pub mod color;
pub mod config;
pub mod content;
pub mod export;
pub mod input;
pub mod simulator;
pub mod state;
pub mod stats;
pub mod timer;
pub mod ui;
