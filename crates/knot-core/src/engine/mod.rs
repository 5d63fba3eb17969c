//! # Engine Module
//!
//! The logic core of the smoothing pipeline. The engine owns no long-lived
//! state of its own: it borrows a [`BackboneTrace`](crate::core::models::trace::BackboneTrace)
//! exclusively for the duration of a call and mutates it in place.
//!
//! - **Relaxation filter** ([`filter`]) - proposes a new position for one
//!   interior vertex from its committed neighbors
//! - **Self-intersection guard** ([`guard`]) - probes the two triangles swept
//!   by a proposed move against every non-adjacent chain segment
//! - **Smoothing driver** ([`smoothing`]) - sequences filter and guard over
//!   the interior vertices, pass by pass, in a fixed sequential order
//! - **Configuration** ([`config`]), **progress reporting** ([`progress`]),
//!   and **error types** ([`error`])

pub mod config;
pub mod error;
pub mod filter;
pub mod guard;
pub mod progress;
pub mod smoothing;
