//! Reporting and mutation services over snapshot data.

pub mod services;
