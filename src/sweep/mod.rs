//! Parameter-space bookkeeping: which screenshot belongs to which point of which sweep.

/// Sweep enumeration (`p<dim>` keys and their ordered filenames).
pub mod enumerate;
/// Deterministic screenshot filenames for `(dim, step)` pairs.
pub mod naming;
