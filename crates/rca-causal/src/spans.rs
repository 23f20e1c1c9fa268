//! Span definitions per operation: mutation, reconcile, submit.

/// Create a span around one structural edit.
#[macro_export]
macro_rules! mutation_span {
    ($op:expr, $section_id:expr) => {
        tracing::debug_span!("rca.mutation", op = $op, section_id = %$section_id)
    };
}

/// Create a reconciliation span.
#[macro_export]
macro_rules! reconcile_span {
    ($cause_count:expr) => {
        tracing::info_span!("rca.reconcile", causes = $cause_count)
    };
}

/// Create a submit span.
#[macro_export]
macro_rules! submit_span {
    ($section_count:expr) => {
        tracing::info_span!("rca.submit", sections = $section_count)
    };
}

