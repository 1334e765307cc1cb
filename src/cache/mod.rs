//! Caching for price lookups.
//!
//! This module provides the transparent cache that sits in front of a
//! `PriceSource` and bounds how old a served price may be.

pub mod transparent;

pub use transparent::TransparentCache;
