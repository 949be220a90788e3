//! congestion feedback core for capacitated, multi-class transit assignment.
//!
//! provides the per-segment crowding and congestion cost functions consumed by an
//! external path-assignment engine, the line-ordered extra added wait time and
//! perceived headway adjustment run between assignment iterations, and the
//! per-class journey-level automata restricting legal mode sequences.
pub mod model;
