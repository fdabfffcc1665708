//! Building envelope models.
//!
//! This module contains models for the opaque and fenestration assemblies
//! that make up a building's walls, roofs, floors and windows.

pub mod assembly;
