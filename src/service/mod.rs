pub mod aggregator;
pub mod cleaner;
pub mod matcher;
pub mod normalizer;
pub mod reconciler;
pub mod store;

pub use cleaner::StatusFilter;
pub use reconciler::{CompareOutcome, ReconcileService};
pub use store::{PageResult, ReportStore};
