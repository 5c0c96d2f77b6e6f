//! Cross-crate pipeline scenarios.

mod event_scan;
mod throughput_run;
