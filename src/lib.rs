//! Resume Tailor - Accomplishment selection core
//!
//! This crate turns raw job-posting text into structured requirements,
//! scores a candidate's accomplishment statements against them with a
//! multi-factor weighted model, and selects a bounded, diverse subset
//! together with coverage, gap, and recommendation analytics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
