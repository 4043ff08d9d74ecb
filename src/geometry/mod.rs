//! Geometry utilities for polymesh-import.
//!
//! This module provides planar polygon metrics and the degeneracy checks run
//! after a mesh is loaded.

pub mod polygon;
pub mod quality;
