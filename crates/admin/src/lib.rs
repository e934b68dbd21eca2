//! Bodega Admin dashboard library.
//!
//! This crate provides the dashboard functionality as a library, allowing it
//! to be tested and reused by the CLI surface.
//!
//! # Architecture
//!
//! - [`api`] - REST client for the platform's admin API (bearer auth)
//! - [`session`] - the persisted bearer credential
//! - [`store`] - in-memory entity stores and derived counters
//! - [`table`] - local sort/filter over store snapshots
//! - [`controllers`] - CRUD view-controllers tying the above together
//! - [`notify`] - notification capability injected into controllers
//!
//! Controllers never talk to the UI directly: every success or failure is
//! reported through the injected [`notify::Notifier`], and every data change
//! lands in a [`store::Store`] that views subscribe to.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod controllers;
pub mod models;
pub mod notify;
pub mod session;
pub mod state;
pub mod store;
pub mod table;
