use arbor_core::{MessageLog, Node, NodeError, Status};

/// Always reports the status it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    status: Status,
}

impl Constant {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    pub fn success() -> Self {
        Self::new(Status::Success)
    }

    pub fn failure() -> Self {
        Self::new(Status::Failure)
    }

    pub fn running() -> Self {
        Self::new(Status::Running)
    }
}

impl<S, M> Node<S, M> for Constant {
    fn update(&mut self, _state: &S, _messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        Ok(())
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Constant"
    }
}

/// Evaluates a boolean function of the state: `true` is `Success`, `false` is `Failure`.
///
/// Never reports `Running`.
pub struct Predicate<F> {
    predicate: F,
    status: Status,
}

impl<F> Predicate<F> {
    pub fn new(predicate: F) -> Self {
        Self {
            predicate,
            status: Status::Failure,
        }
    }
}

impl<S, M, F> Node<S, M> for Predicate<F>
where
    F: FnMut(&S) -> bool,
{
    fn update(&mut self, state: &S, _messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        self.status = if (self.predicate)(state) {
            Status::Success
        } else {
            Status::Failure
        };
        Ok(())
    }

    fn halt(&mut self) {
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Predicate"
    }
}

/// General purpose leaf driven by a closure.
///
/// The closure sees the state and the message log and returns the status for this tick. An `Err`
/// is a fault: the driver reports `Failure` for the tick.
pub struct Action<F> {
    action: F,
    status: Status,
}

impl<F> Action<F> {
    pub fn new(action: F) -> Self {
        Self {
            action,
            status: Status::Failure,
        }
    }
}

impl<S, M, F> Node<S, M> for Action<F>
where
    F: FnMut(&S, &mut MessageLog<M>) -> Result<Status, NodeError>,
{
    fn update(&mut self, state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        match (self.action)(state, messages) {
            Ok(status) => {
                self.status = status;
                Ok(())
            }
            Err(err) => {
                self.status = Status::Failure;
                Err(err)
            }
        }
    }

    fn halt(&mut self) {
        self.status = Status::Failure;
    }

    fn status(&self) -> Status {
        self.status
    }

    fn name(&self) -> &'static str {
        "Action"
    }
}

/// Appends a copy of its message to the log and succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emit<M> {
    message: M,
}

impl<M> Emit<M> {
    pub fn new(message: M) -> Self {
        Self { message }
    }
}

impl<S, M> Node<S, M> for Emit<M>
where
    M: Clone,
{
    fn update(&mut self, _state: &S, messages: &mut MessageLog<M>) -> Result<(), NodeError> {
        messages.push(self.message.clone());
        Ok(())
    }

    fn status(&self) -> Status {
        Status::Success
    }

    fn name(&self) -> &'static str {
        "Emit"
    }
}
