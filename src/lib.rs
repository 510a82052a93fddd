//! PAYG Engine for Australian income tax
//!
//! This crate computes annual income tax, weekly pay-as-you-go withholding
//! and superannuation contributions from the 2024-25 ATO rate tables, and
//! composes them into per-employee breakdowns and batch reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod rates;
pub mod report;
pub mod sample;
