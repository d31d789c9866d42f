mod common;

use std::thread;
use std::time::Duration;

use arbor_bt::{BoxedNode, ForceStatus, Inverter, RepeatUntil, Repeater, Status, Timeout};
use common::{run, scripted};

use Status::{Failure, Running, Success};

#[test]
fn inverter_swaps_outcomes_and_passes_running() {
    let (child, _) = scripted(&[Running, Success, Failure]);
    let mut node: BoxedNode<()> = Box::new(Inverter::new(child));

    assert_eq!(run(&mut node, 3), vec![Running, Failure, Success]);
}

#[test]
fn force_status_discards_child_result() {
    let (child, probe) = scripted(&[Failure]);
    let mut node: BoxedNode<()> = Box::new(ForceStatus::success(child));

    assert_eq!(run(&mut node, 2), vec![Success, Success]);
    assert_eq!(probe.updates.get(), 2);
}

#[test]
fn force_status_leaves_a_running_child_alone() {
    let (child, probe) = scripted(&[Running, Running, Success]);
    let mut node: BoxedNode<()> = Box::new(ForceStatus::failure(child));

    assert_eq!(run(&mut node, 3), vec![Failure, Failure, Failure]);
    assert_eq!(probe.initiates.get(), 1);
    assert_eq!(probe.halts.get(), 0);
}

#[test]
fn repeater_counts_child_completions() {
    let (child, _) = scripted(&[Running, Failure]);
    let mut node: BoxedNode<()> = Box::new(Repeater::new(2, child));

    assert_eq!(run(&mut node, 4), vec![Running, Running, Running, Failure]);
}

#[test]
fn repeater_starts_counting_again_each_episode() {
    let (child, _) = scripted(&[Success]);
    let mut node: BoxedNode<()> = Box::new(Repeater::new(2, child));

    assert_eq!(run(&mut node, 4), vec![Running, Success, Running, Success]);
}

#[test]
fn unbounded_repeater_never_settles() {
    let (child, probe) = scripted(&[Success, Failure]);
    let mut node: BoxedNode<()> = Box::new(Repeater::forever(child));

    assert_eq!(run(&mut node, 5), vec![Running; 5]);
    assert_eq!(probe.updates.get(), 5);
}

#[test]
fn repeat_until_success() {
    let (child, _) = scripted(&[Failure, Failure, Success]);
    let mut node: BoxedNode<()> = Box::new(RepeatUntil::until_success(child));

    assert_eq!(run(&mut node, 3), vec![Running, Running, Success]);
}

#[test]
fn repeat_until_failure() {
    let (child, _) = scripted(&[Success, Success, Failure]);
    let mut node: BoxedNode<()> = Box::new(RepeatUntil::until_failure(child));

    assert_eq!(run(&mut node, 3), vec![Running, Running, Success]);
}

#[test]
fn repeat_until_restarts_a_settled_child_every_tick() {
    let (child, probe) = scripted(&[Failure, Failure, Success]);
    let mut node: BoxedNode<()> = Box::new(RepeatUntil::until_success(child));

    run(&mut node, 3);
    assert_eq!(probe.initiates.get(), 3);
}

#[test]
fn timeout_reports_completion_after_deadline_then_rearms() {
    // A wide window keeps the first two ticks clear of the deadline on a loaded machine.
    let (child, probe) = scripted(&[Running]);
    let mut node: BoxedNode<()> = Box::new(Timeout::new(
        Duration::from_millis(50),
        Failure,
        child,
    ));

    assert_eq!(run(&mut node, 2), vec![Running, Running]);
    thread::sleep(Duration::from_millis(60));
    assert_eq!(run(&mut node, 2), vec![Failure, Running]);

    // The expired tick did not reach the child, and the running child was halted.
    assert_eq!(probe.updates.get(), 3);
    assert_eq!(probe.halts.get(), 1);
}

#[test]
fn timeout_adopts_child_result_before_deadline() {
    let (child, _) = scripted(&[Running, Success]);
    let mut node: BoxedNode<()> = Box::new(Timeout::new(Duration::from_secs(60), Failure, child));

    assert_eq!(run(&mut node, 2), vec![Running, Success]);
}

#[test]
fn timeout_with_unrepresentable_deadline_never_expires() {
    let (child, probe) = scripted(&[Running, Running, Success]);
    let mut node: BoxedNode<()> = Box::new(Timeout::new(Duration::MAX, Failure, child));

    assert_eq!(run(&mut node, 3), vec![Running, Running, Success]);
    assert_eq!(probe.updates.get(), 3);
}
