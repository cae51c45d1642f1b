//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Today that is only
//! [`thermal`], which holds the direct-expansion exchanger models.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the march, the zone reductions, and the sizing search live. The
//! `core` module itself is private. Its input and result types are
//! re-exported from the model module so callers can build designs and read
//! traces without reaching into `core`.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the core entry point. A single `core` may be exposed through several
//! adapters, as [`thermal::dx::DxExchanger`] and [`thermal::dx::DxTubeSizing`]
//! are.

pub mod thermal;
