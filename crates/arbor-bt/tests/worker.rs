use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arbor_bt::{halt, tick, Node, Status, Worker};

/// Answers `Running` twice, then `Success`, for every episode.
fn two_then_success() -> Worker<u32> {
    Worker::new(|ticks, replies| {
        for (i, _state) in ticks.into_iter().enumerate() {
            let status = if i < 2 { Status::Running } else { Status::Success };
            if replies.send(status).is_err() {
                break;
            }
        }
    })
}

fn step(node: &mut Worker<u32>, state: u32) -> Status {
    tick::<u32, (), _>(node, &state, &mut Vec::new())
}

#[test]
fn worker_answers_each_tick() {
    let mut node = two_then_success();

    let statuses: Vec<_> = (0..3).map(|i| step(&mut node, i)).collect();
    assert_eq!(statuses, vec![Status::Running, Status::Running, Status::Success]);
    assert!(!node.is_attached());
}

#[test]
fn worker_sees_the_state_it_is_ticked_with() {
    let mut node: Worker<u32> = Worker::new(|ticks, replies| {
        for state in ticks {
            let status = if state >= 10 { Status::Success } else { Status::Running };
            if replies.send(status).is_err() {
                break;
            }
        }
    });

    assert_eq!(step(&mut node, 3), Status::Running);
    assert_eq!(step(&mut node, 12), Status::Success);
}

#[test]
fn each_episode_spawns_a_fresh_worker() {
    let spawns = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&spawns);
    let mut node: Worker<u32> = Worker::new(move |ticks, replies| {
        counter.fetch_add(1, Ordering::SeqCst);
        for _ in ticks {
            if replies.send(Status::Success).is_err() {
                break;
            }
        }
    });

    for i in 0..3 {
        assert_eq!(step(&mut node, i), Status::Success);
    }
    assert_eq!(spawns.load(Ordering::SeqCst), 3);
}

#[test]
fn worker_that_exits_early_fails_the_tick() {
    let mut node: Worker<u32> = Worker::new(|ticks, replies| {
        if ticks.recv().is_ok() {
            let _ = replies.send(Status::Running);
        }
    });

    assert_eq!(step(&mut node, 0), Status::Running);
    assert_eq!(step(&mut node, 1), Status::Failure);
    assert!(!node.is_attached());
}

#[test]
fn panicking_worker_fails_the_tick() {
    let mut node: Worker<u32> = Worker::new(|_ticks, _replies| panic!("worker blew up"));

    assert_eq!(step(&mut node, 0), Status::Failure);
}

#[test]
fn halt_stops_a_running_worker_and_is_idempotent() {
    let mut node = two_then_success();

    assert_eq!(step(&mut node, 0), Status::Running);
    assert!(node.is_attached());

    halt::<u32, (), _>(&mut node);
    assert!(!node.is_attached());
    assert_eq!(Node::<u32, ()>::status(&node), Status::Failure);

    halt::<u32, (), _>(&mut node);
    Node::<u32, ()>::halt(&mut node);
    assert!(!node.is_attached());

    // Next episode starts from the top of the script.
    assert_eq!(step(&mut node, 0), Status::Running);
}
