//! High-level, user-facing entry points tying the engine and core together.

pub mod smooth;
