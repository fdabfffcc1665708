//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules. Today that is only
//! `envelope`, covering layered building assemblies.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the domain logic lives. The [`twine_core::Model`] implementation is a
//! thin adapter that delegates to that core; the types a caller needs to build
//! its inputs are re-exported from the model module.

pub mod envelope;
