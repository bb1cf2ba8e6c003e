use std::path::Path;

use tracing::info;

use super::InternalEvent;

#[derive(Debug)]
pub struct ReportWritten<'a> {
    pub path: &'a Path,
    pub tags: usize,
    pub pairs: usize,
}

impl InternalEvent for ReportWritten<'_> {
    fn emit(self) {
        info!(
            message = "Report written.",
            path = %self.path.display(),
            tags = %self.tags,
            pairs = %self.pairs,
        );
    }
}
