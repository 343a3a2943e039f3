use crate::conversation::Conversation;
use crate::input::validate_input;
use crate::worker::{WorkerHandle, SENTINEL};
use crossbeam_channel::{RecvTimeoutError, TryRecvError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Validation failed; `dialog` holds the message.
    Rejected,
    Dispatched,
    /// A request is already running.
    Busy,
}

/// Form state behind the window: both text buffers, the pending modal, and the
/// single in-flight request.
pub struct Controller {
    pub input: String,
    pub output: String,
    pub dialog: Option<String>,
    in_flight: bool,
    worker: WorkerHandle,
}

impl Controller {
    pub fn new(worker: WorkerHandle) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            dialog: None,
            in_flight: false,
            worker,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn click(&mut self) -> ClickOutcome {
        if self.in_flight {
            return ClickOutcome::Busy;
        }
        if let Err(e) = validate_input(&self.input) {
            self.dialog = Some(e.to_string());
            return ClickOutcome::Rejected;
        }
        let conversation = Conversation::for_input(&self.input);
        if self.worker.jobs.send(conversation).is_err() {
            self.set_output(SENTINEL.to_string());
            return ClickOutcome::Dispatched;
        }
        self.in_flight = true;
        ClickOutcome::Dispatched
    }

    /// Picks up a finished translation without blocking. Returns true when the
    /// output changed.
    pub fn poll(&mut self) -> bool {
        if !self.in_flight {
            return false;
        }
        match self.worker.results.try_recv() {
            Ok(text) => {
                self.set_output(text);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.set_output(SENTINEL.to_string());
                true
            }
        }
    }

    pub fn wait(&mut self, timeout: Duration) -> bool {
        if !self.in_flight {
            return false;
        }
        match self.worker.results.recv_timeout(timeout) {
            Ok(text) => {
                self.set_output(text);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                self.set_output(SENTINEL.to_string());
                true
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    fn set_output(&mut self, text: String) {
        self.output.clear();
        self.output.push_str(&text);
        self.in_flight = false;
    }
}
