pub mod record;
pub mod report;
pub mod summary;

pub use record::{FieldMapping, OrderRecord, RawRow, Source};
pub use report::{MatchKind, ReconciledRow, Report, RowView};
pub use summary::{CleaningStats, Summary};
