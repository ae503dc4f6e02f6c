//! # Crate sampler-rs
//!
//! ## sampler-rs
//!
//! The `sampler-rs` crate reads device motion (user acceleration, rotation rate and attitude
//! quaternion) at a fixed interval and keeps a bounded rolling history of the most recent
//! samples, published through an observable state so that views can re-render as new
//! samples arrive.
//!
//! Features include:
//! - Sampling from the [`Phyphox`](https://phyphox.org/) REST API of a phone, from a
//!   synthetic generator, or from a recorded CSV file.
//! - Configurable update interval. Default is 100 ms.
//! - Rolling history of the last 100 samples; oldest samples are evicted first.
//! - Idle / Sampling state machine with idempotent stop and stop-on-background.
//!
//! Ticks that fail or carry no data are logged and skipped; sampling continues.

pub mod adapters;
pub mod config;
pub(crate) mod constants;
pub mod errors;
pub(crate) mod helpers;
pub(crate) mod http_client;
pub mod models;
pub mod ports;
pub mod services;

pub use adapters::{PhyphoxMotion, ReplayMotion, ScriptedMotion, SyntheticMotion};
pub use config::{PhyphoxConfig, PhyphoxVariables, SamplerConfig};
pub use errors::SamplerError;
pub use models::SamplerState;
pub use ports::MotionPort;
pub use services::MotionSampler;
