#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use arbor_bt::{tick, BoxedNode, MessageLog, Node, NodeError, Status};

/// Counters shared between a [`Scripted`] leaf and the test that built it.
#[derive(Debug, Default)]
pub struct Probe {
    pub updates: Cell<usize>,
    pub initiates: Cell<usize>,
    pub halts: Cell<usize>,
}

/// Leaf that cycles through a fixed list of statuses, one per update.
pub struct Scripted {
    script: Vec<Status>,
    cursor: usize,
    status: Status,
    probe: Rc<Probe>,
}

impl Scripted {
    pub fn new(script: &[Status]) -> Self {
        Self {
            script: script.to_vec(),
            cursor: 0,
            status: Status::Failure,
            probe: Rc::default(),
        }
    }

    pub fn probe(&self) -> Rc<Probe> {
        Rc::clone(&self.probe)
    }

    pub fn boxed<S, M>(self) -> BoxedNode<S, M> {
        Box::new(self)
    }
}

impl<S, M> Node<S, M> for Scripted {
    fn initiate(&mut self) {
        self.probe.initiates.set(self.probe.initiates.get() + 1);
    }

    fn update(&mut self, _state: &S, _messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        self.status = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        self.probe.updates.set(self.probe.updates.get() + 1);
        Ok(())
    }

    fn halt(&mut self) {
        self.probe.halts.set(self.probe.halts.get() + 1);
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }
}

/// Builds a scripted leaf and returns it boxed together with its probe.
pub fn scripted<S, M>(script: &[Status]) -> (BoxedNode<S, M>, Rc<Probe>) {
    let node = Scripted::new(script);
    let probe = node.probe();
    (node.boxed(), probe)
}

/// Ticks `node` `n` times against `()` and collects the statuses.
pub fn run(node: &mut BoxedNode<()>, n: usize) -> Vec<Status> {
    (0..n).map(|_| tick(node, &(), &mut Vec::new())).collect()
}
