//! Host route handlers

pub mod health;
