//! `stockpile-api` — HTTP boundary over the stockpile services.

pub mod app;
