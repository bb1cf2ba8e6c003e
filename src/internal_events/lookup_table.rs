use std::path::Path;

use tracing::{debug, info};

use super::InternalEvent;

#[derive(Debug)]
pub struct LookupTableLoaded<'a> {
    pub path: &'a Path,
    pub entries: usize,
}

impl InternalEvent for LookupTableLoaded<'_> {
    fn emit(self) {
        info!(
            message = "Loaded lookup table.",
            path = %self.path.display(),
            entries = %self.entries,
        );
    }
}

#[derive(Debug)]
pub struct LookupRowSkipped {
    pub line: u64,
    pub fields: usize,
}

impl InternalEvent for LookupRowSkipped {
    fn emit(self) {
        debug!(
            message = "Skipping lookup row without exactly three fields.",
            line = %self.line,
            fields = %self.fields,
        );
    }
}
