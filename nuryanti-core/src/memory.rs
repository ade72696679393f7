//! In-memory store and mailer
//!
//! Stand-ins for Postgres and SMTP in tests across the workspace. Both
//! support failure injection.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{NotifyError, StoreError};
use crate::mail::{Mailer, OutgoingEmail};
use crate::models::{
    Faq, Game, Program, RegistrationId, RegistrationRecord, Statistic, Teacher, Testimonial,
};
use crate::store::{ContentStore, RegistrationStore};

/// Content collections held by [`MemoryStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryContent {
    pub programs: Vec<Program>,
    pub testimonials: Vec<Testimonial>,
    pub teachers: Vec<Teacher>,
    pub games: Vec<Game>,
    pub statistics: Vec<Statistic>,
    pub faqs: Vec<Faq>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    registrations: Mutex<Vec<RegistrationRecord>>,
    content: Mutex<MemoryContent>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: MemoryContent) -> Self {
        Self {
            content: Mutex::new(content),
            ..Self::default()
        }
    }

    /// Make every operation fail as if the backend were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Snapshot of stored registrations, oldest first
    pub fn registrations(&self) -> Vec<RegistrationRecord> {
        lock(&self.registrations).clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("memory store marked unavailable"))
        } else {
            Ok(())
        }
    }

    fn read<T, F>(&self, f: F) -> Result<Vec<T>, StoreError>
    where
        F: FnOnce(&MemoryContent) -> Vec<T>,
    {
        self.check()?;
        let content = lock(&self.content);
        Ok(f(&*content))
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn insert(&self, record: &RegistrationRecord) -> Result<RegistrationId, StoreError> {
        self.check()?;
        let mut rows = lock(&self.registrations);
        rows.push(record.clone());
        Ok(rows.len() as RegistrationId)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn programs(&self) -> Result<Vec<Program>, StoreError> {
        self.read(|c| c.programs.clone())
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        self.read(|c| c.testimonials.clone())
    }

    async fn teachers(&self) -> Result<Vec<Teacher>, StoreError> {
        self.read(|c| c.teachers.clone())
    }

    async fn games(&self) -> Result<Vec<Game>, StoreError> {
        self.read(|c| c.games.clone())
    }

    async fn statistics(&self) -> Result<Vec<Statistic>, StoreError> {
        self.read(|c| c.statistics.clone())
    }

    async fn faqs(&self) -> Result<Vec<Faq>, StoreError> {
        self.read(|c| c.faqs.clone())
    }
}

/// Mailer that records messages instead of sending them
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    failing: Mutex<HashSet<String>>,
    attempts: AtomicUsize,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every message addressed to `address`
    pub fn fail_for(&self, address: impl Into<String>) {
        lock(&self.failing).insert(address.into());
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        lock(&self.sent).clone()
    }

    /// Send calls so far, failed ones included
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if lock(&self.failing).contains(&email.to) {
            return Err(NotifyError::Transport(format!("rejected recipient {}", email.to)));
        }
        tracing::debug!(to = %email.to, subject = %email.subject, "recorded email");
        lock(&self.sent).push(email.clone());
        Ok(())
    }
}

// Poisoning ignored: every critical section is a single push or clone.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
