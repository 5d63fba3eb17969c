//! # knotpp Core Library
//!
//! A modernized library for protein backbone knot analysis, based on the
//! structure-smoothing method of W. R. Taylor (Nature 406, 916-919, 2000).
//!
//! A backbone trace (one alpha-carbon position per residue) is repeatedly
//! relaxed towards a straight line. Each relaxation move is checked against
//! the rest of the chain so that the curve can never pass through itself;
//! a self-crossing would silently change the knot type the smoothing exists
//! to reveal. After enough passes, everything but the knotted core of the
//! chain collapses, and the knot becomes visible.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BackboneTrace`)
//!   and pure geometric primitives (ray/triangle intersection).
//!
//! - **[`engine`]: The Logic Core.** The relaxation filter, the
//!   self-intersection guard, and the sequential smoothing driver, together
//!   with configuration, progress reporting, and error types.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the engine and core together behind an ownership-transfer call
//!   surface: a trace goes in by move, the smoothed trace comes back by move.

pub mod core;
pub mod engine;
pub mod workflows;
