//! Pure computations: time parsing, per-day reconciliation and
//! observation classification. No I/O happens below this module.

pub mod classify;
pub mod reconcile;
pub mod time_parser;
