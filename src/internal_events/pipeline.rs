use tracing::error;

use super::InternalEvent;

#[derive(Debug)]
pub struct PipelineFailed<'a, E> {
    pub error: &'a E,
}

impl<E: std::fmt::Display> InternalEvent for PipelineFailed<'_, E> {
    fn emit(self) {
        error!(message = "Processing failed.", error = %self.error);
    }
}
