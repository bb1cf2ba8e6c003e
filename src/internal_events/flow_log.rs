use std::path::Path;

use tracing::{info, trace};

use super::InternalEvent;

#[derive(Debug)]
pub struct FlowLogProcessed<'a> {
    pub path: &'a Path,
    pub accepted: u64,
    pub discarded: u64,
}

impl InternalEvent for FlowLogProcessed<'_> {
    fn emit(self) {
        info!(
            message = "Processed flow log.",
            path = %self.path.display(),
            accepted = %self.accepted,
            discarded = %self.discarded,
        );
    }
}

#[derive(Debug)]
pub struct FlowLineDiscarded {
    pub line: u64,
    pub tokens: usize,
}

impl InternalEvent for FlowLineDiscarded {
    fn emit(self) {
        trace!(
            message = "Discarding flow log line with too few fields.",
            line = %self.line,
            tokens = %self.tokens,
        );
    }
}
