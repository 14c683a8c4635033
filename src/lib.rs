//! Payroll engine for Colombian domestic workers paid by the day
//!
//! This crate calculates direct pay per worked day, the employer's accrued
//! social benefits (prima, cesantías, intereses and vacations), and the
//! PILA social-security contributions for a month of selected days.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod validation;
