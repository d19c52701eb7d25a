// ============================================================================
// Deferred Job Queue
// ============================================================================
//
// Work that must run a little later on the UI thread (the deferred load
// callback) is queued here with a due time and drained from `advance()`.
// Each attachment owns its own queue; nothing is global.

use std::time::{Duration, Instant};

/// Job types that can be deferred
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobType {
    /// Call the attachment's load handler
    InvokeLoadHandler,
}

/// Handle to a queued job, usable for cancellation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JobHandle(u64);

/// A deferred job
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub handle: JobHandle,
    pub job_type: JobType,
    pub due: Instant,
}

#[derive(Debug, Default)]
pub struct JobQueue {
    pending: Vec<Job>,
    next_id: u64,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `job_type` to run once `delay` has passed since `now`
    pub fn push_job(&mut self, job_type: JobType, delay: Duration, now: Instant) -> JobHandle {
        let handle = JobHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Job {
            handle,
            job_type,
            due: now + delay,
        });
        handle
    }

    /// Remove a job before it runs. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: JobHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|job| job.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return every job due at `now`, oldest due time first
    pub fn drain_due(&mut self, now: Instant) -> Vec<Job> {
        let (mut due, pending): (Vec<Job>, Vec<Job>) =
            self.pending.drain(..).partition(|job| job.due <= now);
        self.pending = pending;
        due.sort_by_key(|job| (job.due, job.handle.0));
        due
    }

    /// Check if there are pending jobs
    pub fn has_pending_jobs(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
