pub trait InternalEvent: Sized {
    fn emit(self);
}

pub fn emit(event: impl InternalEvent) {
    event.emit();
}

#[macro_export]
macro_rules! emit {
    ($event:expr) => {
        $crate::internal_events::emit($event)
    };
}

// Modules that require emit! macro so they need to be defined after the macro.
mod flow_log;
mod lookup_table;
mod pipeline;
mod report;

pub use self::flow_log::*;
pub use self::lookup_table::*;
pub use self::pipeline::*;
pub use self::report::*;
