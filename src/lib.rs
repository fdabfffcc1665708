//! # Twine Envelope
//!
//! Layered building-envelope assembly models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! An assembly is an ordered stack of material layers (gypsum board, an air
//! gap, a glass pane, ...). This crate keeps every stack structurally valid,
//! derives whole-assembly thermal and optical properties, and deduplicates
//! reversed assemblies.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
