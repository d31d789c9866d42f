use arbor_bt::{tick, Action, Constant, Emit, NodeError, Predicate, Status};

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn constant_reports_its_status_every_tick() {
    let mut running = Constant::running();
    let mut failure = Constant::failure();

    for _ in 0..3 {
        assert_eq!(tick::<(), (), _>(&mut running, &(), &mut Vec::new()), Status::Running);
        assert_eq!(tick::<(), (), _>(&mut failure, &(), &mut Vec::new()), Status::Failure);
    }
}

#[test]
fn predicate_maps_bool_to_status() {
    let mut even = Predicate::new(|n: &u32| n % 2 == 0);
    let mut log: Vec<()> = Vec::new();

    assert_eq!(tick(&mut even, &4u32, &mut log), Status::Success);
    assert_eq!(tick(&mut even, &5u32, &mut log), Status::Failure);
}

#[test]
fn action_sees_state_and_appends_to_log() {
    let mut action = Action::new(|n: &u32, log: &mut Vec<String>| -> Result<Status, NodeError> {
        log.push(format!("saw {n}"));
        Ok(if *n > 10 { Status::Success } else { Status::Running })
    });
    let mut log = Vec::new();

    assert_eq!(tick(&mut action, &3u32, &mut log), Status::Running);
    assert_eq!(tick(&mut action, &11u32, &mut log), Status::Success);
    assert_eq!(log, vec!["saw 3".to_string(), "saw 11".to_string()]);
}

#[test]
fn action_error_fails_the_tick_and_keeps_earlier_messages() {
    let mut action = Action::new(|_: &(), log: &mut Vec<&'static str>| -> Result<Status, NodeError> {
        log.push("before");
        Err(NodeError::fault("sensor offline"))
    });
    let mut log = Vec::new();

    assert_eq!(tick(&mut action, &(), &mut log), Status::Failure);
    assert_eq!(log, vec!["before"]);
}

#[test]
fn action_can_surface_anyhow_errors() {
    init_logs();
    let mut action = Action::new(|path: &&str, _: &mut Vec<()>| -> Result<Status, NodeError> {
        let err = anyhow::anyhow!("no such file").context(format!("reading {path}"));
        Err(err.into())
    });

    assert_eq!(tick(&mut action, &"map.json", &mut Vec::new()), Status::Failure);
    assert_eq!(Status::Failure, arbor_bt::Node::<&str, ()>::status(&action));
}

#[test]
fn emit_appends_a_copy_each_tick() {
    let mut emit = Emit::new("ping".to_string());
    let mut log = vec!["start".to_string()];

    assert_eq!(tick(&mut emit, &(), &mut log), Status::Success);
    assert_eq!(tick(&mut emit, &(), &mut log), Status::Success);
    assert_eq!(log, vec!["start", "ping", "ping"]);
}
