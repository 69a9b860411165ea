//! HR portal for employee attendance, leave requests and monthly wages.
//!
//! Employees check in and out and request leave; an admin manages employee
//! records, settles leave requests and reviews monthly hours and wages. All
//! state is kept in whole-collection key-value storage, and activity is
//! announced through a best-effort webhook notifier.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod service;
pub mod storage;
