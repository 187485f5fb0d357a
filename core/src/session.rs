//! The phase-gated session state machine.
//!
//! Every public operation checks the current phase before it touches any
//! owned data. A rejected call returns an error and leaves the phase, the
//! parameter store, the input collection, and the result buffer untouched.
//!
//! State that only exists in one phase lives inside that phase's variant:
//! the in-progress group is carried by [`Stage::AddingGroup`] and published
//! results by [`ResultWindow::Ready`]. Leaving the phase drops the data.

use std::mem;

use stateful_types::{
    CallbackError, InvalidArgument, Name, Operation, ParameterValue, Percent, Phase,
    SessionError,
};

#[cfg(test)]
use stateful_types::InputItem;

use crate::config::SessionConfig;
use crate::engine;
use crate::inputs::{GroupBuilder, InputCollection};
use crate::parameters::ParameterStore;
use crate::results::ResultBuffer;

/// Whether results from the last execution may be read.
#[derive(Debug, Default)]
enum ResultWindow {
    #[default]
    Closed,
    Ready(ResultBuffer),
}

#[derive(Debug)]
enum Stage {
    Configurable(ResultWindow),
    SettingParameters,
    AddingInputs,
    AddingGroup(GroupBuilder),
}

impl Stage {
    fn phase(&self) -> Phase {
        match self {
            Stage::Configurable(_) => Phase::Configurable,
            Stage::SettingParameters => Phase::SettingParameters,
            Stage::AddingInputs => Phase::AddingInputs,
            Stage::AddingGroup(_) => Phase::AddingGroup,
        }
    }
}

/// Everything a session owns between `open` and `close`.
#[derive(Debug)]
struct OpenSession {
    parameters: ParameterStore,
    inputs: InputCollection,
    stage: Stage,
}

impl OpenSession {
    fn new() -> Self {
        Self {
            parameters: ParameterStore::default(),
            inputs: InputCollection::default(),
            stage: Stage::Configurable(ResultWindow::Closed),
        }
    }
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Uninitialized,
    Open(OpenSession),
}

/// A single caller's session.
///
/// The session is a plain value: it holds no global state, and independent
/// sessions do not interact. It performs no internal locking; callers that
/// share one across threads must serialize access themselves.
#[derive(Debug, Default)]
pub struct Session {
    config: SessionConfig,
    state: SessionState,
}

fn validate_name(operation: Operation, raw: &str) -> Result<Name, SessionError> {
    Name::new(raw).map_err(|_| SessionError::empty_name(operation))
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            state: SessionState::Uninitialized,
        }
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.state {
            SessionState::Uninitialized => Phase::Uninitialized,
            SessionState::Open(open) => open.stage.phase(),
        }
    }

    /// Whether a successful execution's results are currently readable.
    #[must_use]
    pub fn has_results(&self) -> bool {
        matches!(
            &self.state,
            SessionState::Open(OpenSession {
                stage: Stage::Configurable(ResultWindow::Ready(_)),
                ..
            })
        )
    }

    /// Borrow the open session if the current phase is `required`.
    fn require(
        &mut self,
        operation: Operation,
        required: Phase,
    ) -> Result<&mut OpenSession, SessionError> {
        let phase = self.phase();
        match &mut self.state {
            SessionState::Open(open) if phase == required => Ok(open),
            _ => {
                tracing::debug!(%operation, %phase, "Rejected out-of-phase call");
                Err(SessionError::bad_state(operation, phase))
            }
        }
    }

    fn transition(
        &mut self,
        operation: Operation,
        required: Phase,
        next: Stage,
    ) -> Result<(), SessionError> {
        let open = self.require(operation, required)?;
        tracing::debug!(%operation, from = %required, to = %next.phase(), "Phase transition");
        open.stage = next;
        Ok(())
    }

    // ── Lifecycle ────────────────────────────────────────────

    pub fn open(&mut self) -> Result<(), SessionError> {
        let phase = self.phase();
        if phase != Phase::Uninitialized {
            tracing::debug!(operation = %Operation::Open, %phase, "Rejected out-of-phase call");
            return Err(SessionError::bad_state(Operation::Open, phase));
        }
        self.state = SessionState::Open(OpenSession::new());
        tracing::debug!(
            operation = %Operation::Open,
            from = %phase,
            to = %Phase::Configurable,
            "Phase transition"
        );
        Ok(())
    }

    /// Release everything the session owns. Valid from every phase,
    /// including an in-progress group, which is discarded.
    pub fn close(&mut self) -> Result<(), SessionError> {
        let from = self.phase();
        self.state = SessionState::Uninitialized;
        tracing::debug!(
            operation = %Operation::Close,
            %from,
            to = %Phase::Uninitialized,
            "Phase transition"
        );
        Ok(())
    }

    // ── Parameters ───────────────────────────────────────────

    pub fn begin_parameters(&mut self) -> Result<(), SessionError> {
        self.transition(
            Operation::BeginParameters,
            Phase::Configurable,
            Stage::SettingParameters,
        )
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<(), SessionError> {
        self.set_parameter(Operation::SetBool, name, ParameterValue::Bool(value))
    }

    pub fn set_int(&mut self, name: &str, value: i32) -> Result<(), SessionError> {
        self.set_parameter(Operation::SetInt, name, ParameterValue::Int(value))
    }

    fn set_parameter(
        &mut self,
        operation: Operation,
        name: &str,
        value: ParameterValue,
    ) -> Result<(), SessionError> {
        let open = self.require(operation, Phase::SettingParameters)?;
        let name = validate_name(operation, name)?;
        open.parameters.set(name, value);
        Ok(())
    }

    pub fn end_parameters(&mut self) -> Result<(), SessionError> {
        self.transition(
            Operation::EndParameters,
            Phase::SettingParameters,
            Stage::Configurable(ResultWindow::Closed),
        )
    }

    // ── Inputs ───────────────────────────────────────────────

    pub fn begin_inputs(&mut self) -> Result<(), SessionError> {
        self.transition(Operation::BeginInputs, Phase::Configurable, Stage::AddingInputs)
    }

    pub fn add_item(&mut self, name: &str, value: i32) -> Result<(), SessionError> {
        let open = self.require(Operation::AddItem, Phase::AddingInputs)?;
        let name = validate_name(Operation::AddItem, name)?;
        open.inputs.add_scalar(name, value);
        Ok(())
    }

    pub fn begin_group(&mut self, name: &str) -> Result<(), SessionError> {
        let open = self.require(Operation::BeginGroup, Phase::AddingInputs)?;
        let name = validate_name(Operation::BeginGroup, name)?;
        tracing::debug!(
            operation = %Operation::BeginGroup,
            group = %name,
            from = %Phase::AddingInputs,
            to = %Phase::AddingGroup,
            "Phase transition"
        );
        open.stage = Stage::AddingGroup(GroupBuilder::new(name));
        Ok(())
    }

    pub fn add_group_item(&mut self, name: &str, value: i32) -> Result<(), SessionError> {
        let open = self.require(Operation::AddGroupItem, Phase::AddingGroup)?;
        let name = validate_name(Operation::AddGroupItem, name)?;
        if let Stage::AddingGroup(builder) = &mut open.stage {
            builder.insert(name, value);
        }
        Ok(())
    }

    pub fn end_group(&mut self) -> Result<(), SessionError> {
        let open = self.require(Operation::EndGroup, Phase::AddingGroup)?;
        match mem::replace(&mut open.stage, Stage::AddingInputs) {
            Stage::AddingGroup(builder) => {
                tracing::debug!(
                    operation = %Operation::EndGroup,
                    group = %builder.name(),
                    children = builder.len(),
                    from = %Phase::AddingGroup,
                    to = %Phase::AddingInputs,
                    "Phase transition"
                );
                open.inputs.commit_group(builder);
                Ok(())
            }
            other => {
                let phase = other.phase();
                open.stage = other;
                Err(SessionError::bad_state(Operation::EndGroup, phase))
            }
        }
    }

    pub fn end_inputs(&mut self) -> Result<(), SessionError> {
        self.transition(
            Operation::EndInputs,
            Phase::AddingInputs,
            Stage::Configurable(ResultWindow::Closed),
        )
    }

    // ── Execution ────────────────────────────────────────────

    /// Flatten the inputs, reporting progress, and publish the results.
    ///
    /// Any previously published results are discarded first. If a callback
    /// fails the session stays `Configurable` with no readable results.
    /// Returns the number of flattened values.
    pub fn execute<P, F>(&mut self, on_progress: P, on_finished: F) -> Result<usize, SessionError>
    where
        P: FnMut(Percent) -> Result<(), CallbackError>,
        F: FnOnce(usize) -> Result<(), CallbackError>,
    {
        let order = self.config.flatten_order;
        let open = self.require(Operation::Execute, Phase::Configurable)?;
        open.stage = Stage::Configurable(ResultWindow::Closed);

        let buffer = engine::run(&open.inputs, order, on_progress, on_finished)?;
        let count = buffer.len();
        tracing::info!(
            items = open.inputs.len(),
            outputs = count,
            parameters = open.parameters.len(),
            order = order.as_str(),
            "Execution finished"
        );
        open.stage = Stage::Configurable(ResultWindow::Ready(buffer));
        Ok(count)
    }

    // ── Results ──────────────────────────────────────────────

    fn results(&self, operation: Operation) -> Result<&ResultBuffer, SessionError> {
        match &self.state {
            SessionState::Open(OpenSession {
                stage: Stage::Configurable(ResultWindow::Ready(buffer)),
                ..
            }) => Ok(buffer),
            _ => {
                let phase = self.phase();
                tracing::debug!(%operation, %phase, "Rejected read outside the result window");
                Err(SessionError::bad_state(operation, phase))
            }
        }
    }

    pub fn get_num_outputs(&self) -> Result<usize, SessionError> {
        self.results(Operation::GetNumOutputs).map(ResultBuffer::len)
    }

    pub fn get_output_by_index(&self, index: isize) -> Result<i32, SessionError> {
        let buffer = self.results(Operation::GetOutputByIndex)?;
        buffer.get(index).ok_or(SessionError::InvalidArgument {
            operation: Operation::GetOutputByIndex,
            reason: InvalidArgument::IndexOutOfBounds {
                index,
                len: buffer.len(),
            },
        })
    }

    /// Borrow the whole result buffer. The borrow ends before the session can
    /// be mutated again, so it can never observe a later phase.
    pub fn outputs(&self) -> Result<&[i32], SessionError> {
        self.results(Operation::Outputs).map(ResultBuffer::as_slice)
    }

    // ── Crate-internal introspection ─────────────────────────

    #[cfg(test)]
    pub(crate) fn parameter(&self, name: &str) -> Option<ParameterValue> {
        match &self.state {
            SessionState::Open(open) => open.parameters.get(name),
            SessionState::Uninitialized => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn input(&self, name: &str) -> Option<&InputItem> {
        match &self.state {
            SessionState::Open(open) => open.inputs.get(name),
            SessionState::Uninitialized => None,
        }
    }
}
