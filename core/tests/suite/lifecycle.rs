//! Phase transitions and the result window.

use stateful_core::{
    ErrorKind, FlattenOrder, InvalidArgument, Operation, Phase, Session, SessionConfig,
    SessionError,
};

fn opened() -> Session {
    let mut session = Session::new();
    session.open().unwrap();
    session
}

fn execute(session: &mut Session) -> usize {
    session.execute(|_| Ok(()), |_| Ok(())).unwrap()
}

#[test]
fn open_close_open_behaves_like_fresh_open() {
    let mut reused = opened();
    reused.begin_inputs().unwrap();
    reused.add_item("stale", 9).unwrap();
    reused.end_inputs().unwrap();
    execute(&mut reused);
    reused.close().unwrap();
    reused.open().unwrap();

    assert_eq!(reused.phase(), Phase::Configurable);
    assert!(!reused.has_results());
    assert_eq!(execute(&mut reused), 0);
}

#[test]
fn phases_branch_from_configurable_and_return() {
    let mut session = opened();

    session.begin_parameters().unwrap();
    assert_eq!(session.phase(), Phase::SettingParameters);
    assert_eq!(
        session.begin_inputs().unwrap_err(),
        SessionError::bad_state(Operation::BeginInputs, Phase::SettingParameters)
    );
    session.end_parameters().unwrap();

    session.begin_inputs().unwrap();
    assert_eq!(session.phase(), Phase::AddingInputs);
    assert_eq!(
        session.execute(|_| Ok(()), |_| Ok(())).unwrap_err(),
        SessionError::bad_state(Operation::Execute, Phase::AddingInputs)
    );
    session.begin_group("group").unwrap();
    assert_eq!(
        session.end_inputs().unwrap_err(),
        SessionError::bad_state(Operation::EndInputs, Phase::AddingGroup)
    );
    session.end_group().unwrap();
    session.end_inputs().unwrap();
    assert_eq!(session.phase(), Phase::Configurable);
}

#[test]
fn close_is_valid_from_every_phase() {
    let setups: [fn(&mut Session); 5] = [
        |_| {},
        |s| s.open().unwrap(),
        |s| {
            s.open().unwrap();
            s.begin_parameters().unwrap();
        },
        |s| {
            s.open().unwrap();
            s.begin_inputs().unwrap();
        },
        |s| {
            s.open().unwrap();
            s.begin_inputs().unwrap();
            s.begin_group("g").unwrap();
            s.add_group_item("x", 1).unwrap();
        },
    ];

    for (setup, expected) in setups.iter().zip(Phase::ALL) {
        let mut session = Session::new();
        setup(&mut session);
        assert_eq!(session.phase(), expected);
        session.close().unwrap();
        assert_eq!(session.phase(), Phase::Uninitialized);
    }
}

#[test]
fn results_are_invalidated_by_next_configuration_phase() {
    let mut session = opened();
    session.begin_inputs().unwrap();
    session.add_item("a", 1).unwrap();
    session.end_inputs().unwrap();
    execute(&mut session);
    assert_eq!(session.get_num_outputs().unwrap(), 1);

    session.begin_parameters().unwrap();
    assert_eq!(
        session.get_num_outputs().unwrap_err(),
        SessionError::bad_state(Operation::GetNumOutputs, Phase::SettingParameters)
    );
    session.end_parameters().unwrap();
    assert_eq!(
        session.get_output_by_index(0).unwrap_err(),
        SessionError::bad_state(Operation::GetOutputByIndex, Phase::Configurable)
    );
    assert_eq!(session.outputs().unwrap_err().kind(), ErrorKind::BadState);
}

#[test]
fn inputs_accumulate_across_input_phases() {
    let mut session = opened();
    session.begin_inputs().unwrap();
    session.add_item("a", 1).unwrap();
    session.end_inputs().unwrap();
    session.begin_inputs().unwrap();
    session.add_item("b", 2).unwrap();
    session.add_item("a", 10).unwrap();
    session.end_inputs().unwrap();

    assert_eq!(execute(&mut session), 2);
    assert_eq!(session.outputs().unwrap(), &[10, 2]);
}

#[test]
fn out_of_bounds_indices_are_invalid_arguments() {
    let mut session = opened();
    session.begin_inputs().unwrap();
    session.add_item("a", 1).unwrap();
    session.end_inputs().unwrap();
    execute(&mut session);

    assert_eq!(
        session.get_output_by_index(1).unwrap_err(),
        SessionError::InvalidArgument {
            operation: Operation::GetOutputByIndex,
            reason: InvalidArgument::IndexOutOfBounds { index: 1, len: 1 },
        }
    );
    assert_eq!(
        session.get_output_by_index(-1).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn independent_sessions_do_not_interact() {
    let mut left = opened();
    let mut right = Session::with_config(SessionConfig {
        flatten_order: FlattenOrder::ByName,
    });
    right.open().unwrap();

    left.begin_inputs().unwrap();
    right.begin_inputs().unwrap();
    left.add_item("b", 2).unwrap();
    left.add_item("a", 1).unwrap();
    right.add_item("b", 2).unwrap();
    right.add_item("a", 1).unwrap();
    left.end_inputs().unwrap();
    right.end_inputs().unwrap();

    execute(&mut left);
    execute(&mut right);
    assert_eq!(left.outputs().unwrap(), &[2, 1]);
    assert_eq!(right.outputs().unwrap(), &[1, 2]);
}
