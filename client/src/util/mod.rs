//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is a pure function of static data, so the projections the
//! components render can be tested without a browser or a reactive runtime.

pub mod icons;
pub mod landing;
pub mod passport_layout;
