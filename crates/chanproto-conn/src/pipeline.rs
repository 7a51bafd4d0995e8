use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Condvar, Mutex, PoisonError};

/// Sequences concurrent requests and responses on a shared connection.
///
/// [`next`](Pipeline::next) hands out monotonically increasing ids. A caller
/// then brackets its write with `start_request`/`end_request` and its read
/// with `start_response`/`end_response`; each bracket blocks until every
/// lower id has finished the same stage, so requests go out in id order and
/// responses are consumed in id order.
#[derive(Debug, Default)]
pub struct Pipeline {
    id: AtomicU64,
    request: Sequencer,
    response: Sequencer,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next id in the pipeline.
    pub fn next(&self) -> u64 {
        self.id.fetch_add(1, Ordering::Relaxed)
    }

    /// Block until it is `id`'s turn to send.
    pub fn start_request(&self, id: u64) {
        self.request.start(id);
    }

    /// Mark `id`'s request as sent, releasing the next sender.
    pub fn end_request(&self, id: u64) {
        self.request.end(id);
    }

    /// Block until it is `id`'s turn to read its response.
    pub fn start_response(&self, id: u64) {
        self.response.start(id);
    }

    /// Mark `id`'s response as consumed, releasing the next reader.
    pub fn end_response(&self, id: u64) {
        self.response.end(id);
    }
}

/// Single-stage turnstile: ids pass through `start`/`end` in order.
#[derive(Debug, Default)]
struct Sequencer {
    turn: Mutex<u64>,
    ready: Condvar,
}

impl Sequencer {
    fn start(&self, id: u64) {
        let mut turn = self.turn.lock().unwrap_or_else(PoisonError::into_inner);
        while *turn != id {
            turn = self
                .ready
                .wait(turn)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn end(&self, id: u64) {
        let mut turn = self.turn.lock().unwrap_or_else(PoisonError::into_inner);
        *turn = id + 1;
        self.ready.notify_all();
    }
}
