//! Row source trait definition

use crate::error::DbResult;
use crate::source::DataSource;
use async_trait::async_trait;
use vf_core::RawRow;

/// Delivers the rows of a flat/vehicle sheet
///
/// Implementations strip `header_rows` before returning, so every row handed
/// back is data. Implementations must be Send + Sync for async operation.
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Read every data row of `source`, in file order
    async fn read_rows(&self, source: &DataSource) -> DbResult<Vec<RawRow>>;

    /// Source type identifier for logging
    fn source_type(&self) -> &'static str;
}
