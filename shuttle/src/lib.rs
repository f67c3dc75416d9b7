//! Command line client for the campus shuttle booking service.
//!
//! All business data (routes, fares, wallets, bookings) is owned by a remote HTTP
//! backend. This crate wraps that backend in a typed client ([`api::ShuttleApi`]),
//! keeps the logged-in [`session::Session`] in a local file, and exposes each user
//! action as an operation in [`ops`]. Route ranking lives in [`shuttle_core`].
pub mod api;
pub mod app;
pub mod config;
pub mod ops;
pub mod session;
