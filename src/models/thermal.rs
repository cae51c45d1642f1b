//! Thermal systems models.
//!
//! This module contains models for refrigerant-to-liquid heat exchangers.

pub mod dx;
