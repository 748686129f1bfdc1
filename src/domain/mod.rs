// Domain layer - pure types and derivations, no I/O
pub mod comparison;
pub mod dashboard;
pub mod dataset;
pub mod formatting;
pub mod metric;
pub mod palette;
pub mod region;
pub mod threshold;
pub mod widget;
