//! Bounded FIFO request queue with deadlines and cancellation.
//!
//! The synthesizer is a constrained shared resource: chunks of one request
//! are never parallelized, so throughput beyond one in-flight request comes
//! from queuing. Requests carry an optional latency deadline; expired
//! entries are skipped at pop time.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;
use uuid::Uuid;

use tts_core::{QueueConfig, SynthesisRequest};

/// A queued synthesis request with scheduling metadata.
#[derive(Debug)]
pub struct QueuedRequest {
    /// The original synthesis request.
    pub request: SynthesisRequest,
    /// Time when the request was queued.
    pub queued_at: Instant,
    /// Deadline for completion (if the request set one).
    pub deadline: Option<Instant>,
    /// Request ID for tracking.
    pub id: Uuid,
}

impl QueuedRequest {
    /// Create a new queued request.
    pub fn new(request: SynthesisRequest) -> Self {
        Self::with_default_timeout(request, None)
    }

    /// The request's own deadline wins; `default_timeout_ms` applies only
    /// when the request set none.
    fn with_default_timeout(request: SynthesisRequest, default_timeout_ms: Option<u64>) -> Self {
        let deadline = request
            .max_latency_ms
            .or(default_timeout_ms)
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        Self {
            id: request.id,
            request,
            queued_at: Instant::now(),
            deadline,
        }
    }

    /// Check if the request has exceeded its deadline.
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() > d)
    }

    /// Get the time spent waiting in queue.
    pub fn wait_time(&self) -> Duration {
        self.queued_at.elapsed()
    }
}

/// FIFO queue for synthesis requests.
#[derive(Debug)]
pub struct RequestQueue {
    queue: Mutex<VecDeque<QueuedRequest>>,
    live: DashMap<Uuid, ()>,
    max_size: usize,
    default_timeout_ms: Option<u64>,
}

impl RequestQueue {
    /// Create a new request queue with the given capacity and no default
    /// timeout.
    pub fn new(max_size: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(max_size)),
            live: DashMap::with_capacity(max_size),
            max_size,
            default_timeout_ms: None,
        }
    }

    /// Create a request queue from configuration.
    ///
    /// `request_timeout_ms` becomes the deadline for requests that do not
    /// carry their own `max_latency_ms`.
    pub fn from_config(config: &QueueConfig) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(config.max_queue_size)),
            live: DashMap::with_capacity(config.max_queue_size),
            max_size: config.max_queue_size,
            default_timeout_ms: Some(config.request_timeout_ms),
        }
    }

    /// Add a request to the back of the queue.
    ///
    /// Returns `false` if the queue is full.
    pub fn push(&self, request: SynthesisRequest) -> bool {
        if self.live.len() >= self.max_size {
            return false;
        }

        let queued = QueuedRequest::with_default_timeout(request, self.default_timeout_ms);
        self.live.insert(queued.id, ());
        self.queue.lock().push_back(queued);
        true
    }

    /// Remove and return the oldest live request.
    ///
    /// Deadline-expired requests are skipped and dropped.
    pub fn pop(&self) -> Option<QueuedRequest> {
        let mut queue = self.queue.lock();

        while let Some(req) = queue.pop_front() {
            let was_live = self.live.remove(&req.id).is_some();
            if was_live && !req.is_expired() {
                return Some(req);
            }
        }

        None
    }

    /// Cancel a queued request by ID and drop its entry.
    ///
    /// Returns `true` if the request was still pending.
    pub fn cancel(&self, id: Uuid) -> bool {
        if self.live.remove(&id).is_some() {
            self.queue.lock().retain(|req| req.id != id);
            true
        } else {
            false
        }
    }

    /// Get the number of live (non-cancelled) queued requests.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Check if the queue has no live requests.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Check if the queue is full.
    pub fn is_full(&self) -> bool {
        self.live.len() >= self.max_size
    }

    /// Clear the queue.
    pub fn clear(&self) {
        self.queue.lock().clear();
        self.live.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_request(text: &str) -> SynthesisRequest {
        SynthesisRequest::new(text)
    }

    #[test]
    fn test_queue_basic_operations() {
        let queue = RequestQueue::new(10);

        assert!(queue.is_empty());
        assert!(!queue.is_full());

        assert!(queue.push(make_request("test")));
        assert_eq!(queue.len(), 1);

        let popped = queue.pop();
        assert!(popped.is_some());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_is_fifo() {
        let queue = RequestQueue::new(10);

        queue.push(make_request("first"));
        queue.push(make_request("second"));
        queue.push(make_request("third"));

        assert_eq!(queue.pop().unwrap().request.text, "first");
        assert_eq!(queue.pop().unwrap().request.text, "second");
        assert_eq!(queue.pop().unwrap().request.text, "third");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_queue_full() {
        let queue = RequestQueue::new(2);

        assert!(queue.push(make_request("a")));
        assert!(queue.push(make_request("b")));
        assert!(!queue.push(make_request("c")));
        assert!(queue.is_full());
    }

    #[test]
    fn test_cancelled_request_skipped_on_pop() {
        let queue = RequestQueue::new(10);

        let req = make_request("doomed");
        let id = req.id;
        queue.push(req);
        queue.push(make_request("survivor"));

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id)); // already cancelled

        assert_eq!(queue.pop().unwrap().request.text, "survivor");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_expired_request_skipped_on_pop() {
        let queue = RequestQueue::new(10);

        queue.push(make_request("expired").with_max_latency_ms(0));
        queue.push(make_request("fresh"));

        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(queue.pop().unwrap().request.text, "fresh");
    }

    #[test]
    fn test_from_config_capacity_and_default_timeout() {
        let config = QueueConfig {
            max_queue_size: 1,
            request_timeout_ms: 0,
        };
        let queue = RequestQueue::from_config(&config);

        assert!(queue.push(make_request("only")));
        assert!(!queue.push(make_request("rejected")));

        // The configured timeout applies to requests without their own
        // deadline.
        std::thread::sleep(Duration::from_millis(5));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_request_deadline_overrides_default_timeout() {
        let config = QueueConfig {
            max_queue_size: 4,
            request_timeout_ms: 0,
        };
        let queue = RequestQueue::from_config(&config);

        queue.push(make_request("patient").with_max_latency_ms(60_000));
        std::thread::sleep(Duration::from_millis(5));

        assert_eq!(queue.pop().unwrap().request.text, "patient");
    }

    #[test]
    fn test_cancel_frees_capacity_without_growth() {
        let queue = RequestQueue::new(2);

        // Repeated push/cancel cycles must not accumulate dead entries.
        for _ in 0..100 {
            let req = make_request("churn");
            let id = req.id;
            assert!(queue.push(req));
            assert!(queue.cancel(id));
        }

        assert!(queue.push(make_request("a")));
        assert!(queue.push(make_request("b")));
        assert_eq!(queue.pop().unwrap().request.text, "a");
        assert_eq!(queue.pop().unwrap().request.text, "b");
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_queued_request_wait_time() {
        let queued = QueuedRequest::new(make_request("test"));
        std::thread::sleep(Duration::from_millis(10));
        assert!(queued.wait_time() >= Duration::from_millis(10));
    }
}
