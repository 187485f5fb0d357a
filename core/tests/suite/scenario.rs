//! End-to-end runs of the full protocol.

use stateful_core::{CallbackError, CallbackKind, Percent, Phase, Session, SessionError};

#[test]
fn demo_scenario_reports_three_outputs() {
    let mut session = Session::new();
    session.open().unwrap();

    session.begin_parameters().unwrap();
    session.set_bool("first", true).unwrap();
    session.set_int("second", 42).unwrap();
    session.end_parameters().unwrap();

    session.begin_inputs().unwrap();
    session.add_item("thing", 1).unwrap();
    session.add_item("another thing", 2).unwrap();
    session.begin_group("group").unwrap();
    session.add_group_item("nested", 5).unwrap();
    session.end_group().unwrap();
    session.end_inputs().unwrap();

    let mut progress = Vec::new();
    let mut finished = Vec::new();
    let count = session
        .execute(
            |percent| {
                progress.push(percent);
                Ok(())
            },
            |count| {
                finished.push(count);
                Ok(())
            },
        )
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(finished, vec![3]);
    assert!(progress.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(progress.last(), Some(&Percent::COMPLETE));
    assert_eq!(
        progress.iter().map(|p| p.value()).collect::<Vec<_>>(),
        vec![0, 33, 66, 100]
    );

    let mut outputs: Vec<i32> = (0..3)
        .map(|index| session.get_output_by_index(index).unwrap())
        .collect();
    outputs.sort_unstable();
    assert_eq!(outputs, vec![1, 2, 5]);

    session.close().unwrap();
    assert_eq!(session.phase(), Phase::Uninitialized);
}

#[test]
fn single_group_round_trip() {
    let mut session = Session::new();
    session.open().unwrap();
    session.begin_inputs().unwrap();
    session.begin_group("pair").unwrap();
    session.add_group_item("a", 1).unwrap();
    session.add_group_item("b", 2).unwrap();
    session.end_group().unwrap();
    session.end_inputs().unwrap();
    session.execute(|_| Ok(()), |_| Ok(())).unwrap();

    assert_eq!(session.get_num_outputs().unwrap(), 2);
    let values = [
        session.get_output_by_index(0).unwrap(),
        session.get_output_by_index(1).unwrap(),
    ];
    assert!(values.contains(&1));
    assert!(values.contains(&2));
}

#[test]
fn progress_failure_surfaces_and_session_stays_usable() {
    let mut session = Session::new();
    session.open().unwrap();
    session.begin_inputs().unwrap();
    session.add_item("a", 1).unwrap();
    session.add_item("b", 2).unwrap();
    session.end_inputs().unwrap();

    let mut finished = false;
    let err = session
        .execute(
            |percent| {
                if percent.is_complete() {
                    Err(CallbackError::new("refusing to finish"))
                } else {
                    Ok(())
                }
            },
            |_| {
                finished = true;
                Ok(())
            },
        )
        .unwrap_err();

    assert!(!finished);
    let SessionError::CallbackFailure {
        callback, source, ..
    } = &err
    else {
        panic!("expected callback failure, got {err:?}");
    };
    assert_eq!(*callback, CallbackKind::Progress);
    assert_eq!(source.reason(), "refusing to finish");
    assert_eq!(session.phase(), Phase::Configurable);
    assert!(session.get_num_outputs().is_err());

    assert_eq!(session.execute(|_| Ok(()), |_| Ok(())).unwrap(), 2);
}

#[test]
fn scoped_builders_match_raw_calls() {
    let mut session = Session::new();
    session.open().unwrap();
    session
        .configure(|params| {
            params.boolean("first", true)?.integer("second", 42)?;
            Ok(())
        })
        .unwrap();
    let output = session
        .recipe(|recipe| {
            recipe.add_item("thing", 1)?.add_item("another thing", 2)?;
            recipe.group("group", |group| {
                group.add_item("nested", 5)?;
                Ok(())
            })?;
            Ok(())
        })
        .unwrap()
        .execute(|_| {})
        .unwrap();

    assert_eq!(output.items, vec![1, 2, 5]);
}
