//! Execution engine: walks the input collection once, reports progress, and
//! produces the result buffer.
//!
//! Execution runs synchronously on the caller's thread and cannot be
//! cancelled once started, except by a callback returning an error.

use stateful_types::{
    CallbackError, CallbackKind, FlattenOrder, Operation, Percent, SessionError,
};

use crate::inputs::InputCollection;
use crate::results::ResultBuffer;

fn callback_failure(callback: CallbackKind, source: CallbackError) -> SessionError {
    tracing::warn!(%callback, reason = source.reason(), "Execution aborted by callback");
    SessionError::CallbackFailure {
        operation: Operation::Execute,
        callback,
        source,
    }
}

/// Run one execution over `inputs`.
///
/// For the i-th of N items `on_progress` receives `floor(100 * i / N)`, then
/// a final 100 is always reported (also when N = 0). `on_finished` receives
/// the number of flattened values. The buffer is only returned if every
/// callback succeeded.
pub(crate) fn run<P, F>(
    inputs: &InputCollection,
    order: FlattenOrder,
    mut on_progress: P,
    on_finished: F,
) -> Result<ResultBuffer, SessionError>
where
    P: FnMut(Percent) -> Result<(), CallbackError>,
    F: FnOnce(usize) -> Result<(), CallbackError>,
{
    let items = inputs.ordered(order);
    let total = items.len();

    for (index, (name, item)) in items.into_iter().enumerate() {
        let percent = Percent::of(index, total);
        tracing::trace!(item = %name, values = item.value_count(), %percent, "Execution progress");
        on_progress(percent).map_err(|err| callback_failure(CallbackKind::Progress, err))?;
    }
    on_progress(Percent::COMPLETE).map_err(|err| callback_failure(CallbackKind::Progress, err))?;

    let values = inputs.flatten(order);

    on_finished(values.len()).map_err(|err| callback_failure(CallbackKind::Finished, err))?;

    Ok(ResultBuffer::new(values))
}
