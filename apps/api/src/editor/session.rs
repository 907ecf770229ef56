//! In-memory editing sessions.
//!
//! A session owns exactly one current snapshot. Writers swap the `Arc` under
//! the write lock; readers clone the `Arc` out and release the lock before doing
//! anything slow. Nothing here outlives the process, and a session that sees
//! no writes for the idle TTL is evicted.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::assistant::apply::apply_improvement;
use crate::assistant::AnalysisResult;
use crate::errors::AppError;
use crate::models::resume::ResumeModel;

struct Session {
    snapshot: Arc<ResumeModel>,
    pending_review: Option<AnalysisResult>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    /// Monotonic twin of `updated_at`, used for idle eviction.
    last_active: Instant,
}

impl Session {
    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.last_active = Instant::now();
    }
}

/// What callers get back about a session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub resume: Arc<ResumeModel>,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    in_flight: Arc<Mutex<HashSet<(Uuid, String)>>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
            max_sessions,
            idle_ttl,
        }
    }

    /// Opens a session seeded with the sample résumé. Idle sessions are
    /// evicted first so abandoned ones never hold the cap.
    pub async fn create(&self) -> Result<SessionView, AppError> {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions);
        if sessions.len() >= self.max_sessions {
            warn!("Session limit reached ({})", self.max_sessions);
            return Err(AppError::SessionLimit(self.max_sessions));
        }

        let id = Uuid::new_v4();
        let now = Utc::now();
        let session = Session {
            snapshot: Arc::new(ResumeModel::sample()),
            pending_review: None,
            created_at: now,
            updated_at: now,
            last_active: Instant::now(),
        };
        let view = view_of(id, &session);
        sessions.insert(id, session);

        info!("Opened session {id} ({} active)", sessions.len());
        Ok(view)
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionView, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(view_of(id, session))
    }

    pub async fn snapshot(&self, id: Uuid) -> Result<Arc<ResumeModel>, AppError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(|s| Arc::clone(&s.snapshot))
            .ok_or_else(|| not_found(id))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&id).ok_or_else(|| not_found(id))?;
        info!("Closed session {id} ({} active)", sessions.len());
        Ok(())
    }

    /// Replaces the snapshot with `f(current)`.
    pub async fn update<F>(&self, id: Uuid, f: F) -> Result<Arc<ResumeModel>, AppError>
    where
        F: FnOnce(&ResumeModel) -> ResumeModel,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.snapshot = Arc::new(f(&session.snapshot));
        session.touch();
        Ok(Arc::clone(&session.snapshot))
    }

    /// Like [`update`](Self::update), but `f` may decline by returning `None`,
    /// in which case the snapshot is left alone and `Ok(None)` is returned.
    pub async fn try_update<F>(&self, id: Uuid, f: F) -> Result<Option<Arc<ResumeModel>>, AppError>
    where
        F: FnOnce(&ResumeModel) -> Option<ResumeModel>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        match f(&session.snapshot) {
            Some(next) => {
                session.snapshot = Arc::new(next);
                session.touch();
                Ok(Some(Arc::clone(&session.snapshot)))
            }
            None => Ok(None),
        }
    }

    /// Back to the sample résumé; any pending review is dropped.
    pub async fn reset(&self, id: Uuid) -> Result<Arc<ResumeModel>, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.snapshot = Arc::new(ResumeModel::sample());
        session.pending_review = None;
        session.touch();
        info!("Reset session {id}");
        Ok(Arc::clone(&session.snapshot))
    }

    // ────────────────────────────────────────────────────────────────────────
    // Review results
    // ────────────────────────────────────────────────────────────────────────

    pub async fn set_review(&self, id: Uuid, review: AnalysisResult) -> Result<(), AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.pending_review = Some(review);
        session.last_active = Instant::now();
        Ok(())
    }

    pub async fn pending_review(&self, id: Uuid) -> Result<Option<AnalysisResult>, AppError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.pending_review.clone())
    }

    /// Applies the pending improvement for `experience_id` and removes it from
    /// the review so it cannot be applied twice. If the role was deleted since
    /// the review ran, the improvement is discarded and `NotFound` returned.
    pub async fn apply_pending_improvement(
        &self,
        id: Uuid,
        experience_id: &str,
    ) -> Result<Arc<ResumeModel>, AppError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;

        let review = session
            .pending_review
            .as_mut()
            .ok_or_else(|| AppError::NotFound(format!("No pending review for session {id}")))?;
        let position = review
            .improved_experience
            .iter()
            .position(|imp| imp.id == experience_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("No pending improvement for experience {experience_id}"))
            })?;
        let improvement = review.improved_experience.remove(position);

        match apply_improvement(&session.snapshot, &improvement) {
            Some(next) => {
                session.snapshot = Arc::new(next);
                session.touch();
                debug!("Applied review improvement to experience {experience_id} in session {id}");
                Ok(Arc::clone(&session.snapshot))
            }
            None => {
                warn!("Discarded improvement for removed experience {experience_id} in session {id}");
                Err(AppError::NotFound(format!(
                    "Experience {experience_id} no longer exists"
                )))
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Idle eviction
    // ────────────────────────────────────────────────────────────────────────

    /// Drops every session with no writes for the idle TTL. Returns how many went.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict_idle_locked(&mut sessions)
    }

    fn evict_idle_locked(&self, sessions: &mut HashMap<Uuid, Session>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| s.last_active.elapsed() < self.idle_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle sessions ({} active)", sessions.len());
        }
        evicted
    }

    /// Runs [`evict_idle`](Self::evict_idle) every `every` until the runtime shuts down.
    pub fn spawn_idle_sweep(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                store.evict_idle().await;
            }
        })
    }

    // ────────────────────────────────────────────────────────────────────────
    // In-flight assistant requests
    // ────────────────────────────────────────────────────────────────────────

    /// Marks `key` as having an assistant request outstanding. The mark is
    /// cleared when the returned guard drops. A second request for the same
    /// key while the first is outstanding is a `Conflict`.
    pub fn begin_request(&self, id: Uuid, key: String) -> Result<InFlightGuard, AppError> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert((id, key.clone())) {
            return Err(AppError::Conflict(format!(
                "A request for '{key}' is already in progress"
            )));
        }
        Ok(InFlightGuard {
            set: Arc::clone(&self.in_flight),
            entry: Some((id, key)),
        })
    }
}

pub struct InFlightGuard {
    set: Arc<Mutex<HashSet<(Uuid, String)>>>,
    entry: Option<(Uuid, String)>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Some(entry) = self.entry.take() {
            let mut set = self.set.lock().unwrap_or_else(|e| e.into_inner());
            set.remove(&entry);
        }
    }
}

fn view_of(id: Uuid, session: &Session) -> SessionView {
    SessionView {
        session_id: id,
        created_at: session.created_at,
        updated_at: session.updated_at,
        resume: Arc::clone(&session.snapshot),
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
