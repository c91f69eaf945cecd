//! HTTP client for the issue-labels API

pub mod client;

pub use client::LabelClient;
