//! Session phases and the operations gated by them.

use std::fmt;

/// The discrete mode a session is in.
///
/// Phases form a tree rooted at `Configurable`:
///
/// ```text
/// Uninitialized -> Configurable -+-> SettingParameters -> Configurable
///                                +-> AddingInputs -+-> AddingGroup -> AddingInputs
///                                |                 +-> Configurable
///                                +-> (execute) -> Configurable
/// ```
///
/// `close` leads back to `Uninitialized` from every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Uninitialized,
    Configurable,
    SettingParameters,
    AddingInputs,
    AddingGroup,
}

impl Phase {
    pub const ALL: [Self; 5] = [
        Self::Uninitialized,
        Self::Configurable,
        Self::SettingParameters,
        Self::AddingInputs,
        Self::AddingGroup,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Configurable => "configurable",
            Self::SettingParameters => "setting parameters",
            Self::AddingInputs => "adding inputs",
            Self::AddingGroup => "adding group",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A public session operation, used to label errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Open,
    Close,
    BeginParameters,
    SetBool,
    SetInt,
    EndParameters,
    BeginInputs,
    AddItem,
    BeginGroup,
    AddGroupItem,
    EndGroup,
    EndInputs,
    Execute,
    GetNumOutputs,
    GetOutputByIndex,
    Outputs,
}

impl Operation {
    /// The phase an operation must be issued from.
    ///
    /// `None` means the operation is valid from every phase (only `close`).
    #[must_use]
    pub const fn required_phase(self) -> Option<Phase> {
        match self {
            Self::Close => None,
            Self::Open => Some(Phase::Uninitialized),
            Self::BeginParameters
            | Self::BeginInputs
            | Self::Execute
            | Self::GetNumOutputs
            | Self::GetOutputByIndex
            | Self::Outputs => Some(Phase::Configurable),
            Self::SetBool | Self::SetInt | Self::EndParameters => Some(Phase::SettingParameters),
            Self::AddItem | Self::BeginGroup | Self::EndInputs => Some(Phase::AddingInputs),
            Self::AddGroupItem | Self::EndGroup => Some(Phase::AddingGroup),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::BeginParameters => "begin_parameters",
            Self::SetBool => "set_bool",
            Self::SetInt => "set_int",
            Self::EndParameters => "end_parameters",
            Self::BeginInputs => "begin_inputs",
            Self::AddItem => "add_item",
            Self::BeginGroup => "begin_group",
            Self::AddGroupItem => "add_group_item",
            Self::EndGroup => "end_group",
            Self::EndInputs => "end_inputs",
            Self::Execute => "execute",
            Self::GetNumOutputs => "get_num_outputs",
            Self::GetOutputByIndex => "get_output_by_index",
            Self::Outputs => "outputs",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
