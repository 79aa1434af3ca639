//! In-memory per-browser session state: quiz answers, the generated plan,
//! and the view state machine. Nothing here persists across restarts.
//!
//! Every mutation goes through [`SessionStore::with_session`], which holds
//! the store lock for the whole closure, so toggles, adds, retakes and
//! generation resolution are each atomic with respect to one another.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use crate::catalog;
use crate::names;
use crate::report::{ReportData, Task, TopPriority};

/// The navigable views. `Report`, `ActionPlan` and `DailyTasks` are only
/// reachable while a generated report exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Quiz,
    Loading,
    Report,
    ActionPlan,
    DailyTasks,
    MiniCourse,
    ClarityCall,
    Calendar,
    Retreat,
}

impl View {
    fn requires_report(self) -> bool {
        matches!(self, View::Report | View::ActionPlan | View::DailyTasks)
    }
}

/// A locally-added task, before the `completed` flag is attached.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: crate::report::TaskCategory,
    pub cadence: crate::report::Cadence,
}

/// A locally-added priority. Number, month-1 tasks and completion are
/// assigned on insertion.
#[derive(Debug, Clone)]
pub struct NewPriority {
    pub title: String,
    pub description: String,
    pub expected_result: String,
}

#[derive(Debug)]
pub struct Session {
    pub view: View,
    pub answers: BTreeMap<String, u8>,
    pub report: Option<ReportData>,
    /// Set when the last generation attempt failed; cleared on the next
    /// start or submission.
    pub generation_failed: bool,
    /// Which quiz section the user is currently on.
    pub section_idx: usize,
    /// Bumped on every submission and retake so a stale background
    /// generation can never clobber newer state.
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            view: View::Dashboard,
            answers: BTreeMap::new(),
            report: None,
            generation_failed: false,
            section_idx: 0,
            generation: 0,
        }
    }
}

impl Session {
    // ─── Answer store ───

    /// Record a rating for a question, overwriting any prior value.
    /// Ratings outside 1-5 are rejected; unknown question ids are accepted.
    pub fn set_answer(&mut self, question_id: &str, rating: u8) -> bool {
        if !(names::MIN_RATING..=names::MAX_RATING).contains(&rating) {
            return false;
        }
        self.answers.insert(question_id.to_string(), rating);
        true
    }

    pub fn completion_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completion_count() == catalog::total_questions()
    }

    // ─── Navigation ───

    /// Move to another view. A transition into any report-dependent view is
    /// refused while no report exists, whatever the current view is.
    pub fn navigate(&mut self, to: View) {
        if to.requires_report() && self.report.is_none() {
            return;
        }
        self.view = to;
    }

    /// Explicit quiz start from the dashboard: prior answers and error
    /// state are cleared.
    pub fn start_quiz(&mut self) {
        self.answers.clear();
        self.generation_failed = false;
        self.section_idx = 0;
        self.view = View::Quiz;
    }

    /// Enter the loading state and hand back the token the background task
    /// must present when resolving. Callers check `is_complete` first.
    pub fn begin_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation_failed = false;
        self.view = View::Loading;
        self.generation
    }

    /// Record the outcome of a generation attempt. Outcomes from a
    /// superseded attempt are dropped. The view only moves if the user is
    /// still watching the loading screen; otherwise the report (or error)
    /// is stored quietly and whatever they navigated to stays put.
    pub fn resolve_generation(&mut self, generation: u64, outcome: Result<ReportData, ()>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "stale generation result dropped");
            return;
        }
        match outcome {
            Ok(report) => {
                self.report = Some(report);
                if self.view == View::Loading {
                    self.view = View::Report;
                }
            }
            Err(()) => {
                self.generation_failed = true;
                if self.view == View::Loading {
                    self.view = View::Quiz;
                }
            }
        }
    }

    /// Discard the report entirely and return to the dashboard. Nothing of
    /// the old plan (including local completion flags) survives into the
    /// next generation.
    pub fn retake(&mut self) {
        self.generation += 1;
        self.report = None;
        self.generation_failed = false;
        self.view = View::Dashboard;
    }

    // ─── Local plan mutations ───
    //
    // Tasks are addressed by position, priorities by their stable number.
    // All of these are silent no-ops on invalid input: a toggle never
    // surfaces an error to the user.

    pub fn toggle_task(&mut self, index: usize) {
        if let Some(task) = self
            .report
            .as_mut()
            .and_then(|r| r.daily_tasks.get_mut(index))
        {
            task.completed = !task.completed;
        }
    }

    pub fn toggle_priority(&mut self, priority_number: u32) {
        if let Some(priority) = self.report.as_mut().and_then(|r| {
            r.top3_priorities
                .iter_mut()
                .find(|p| p.priority_number == priority_number)
        }) {
            priority.completed = !priority.completed;
        }
    }

    pub fn add_task(&mut self, new: NewTask) {
        if let Some(report) = self.report.as_mut() {
            report.daily_tasks.push(Task {
                title: new.title,
                description: new.description,
                category: new.category,
                cadence: new.cadence,
                completed: false,
            });
        }
    }

    pub fn add_priority(&mut self, new: NewPriority) {
        if let Some(report) = self.report.as_mut() {
            let next_number = report
                .top3_priorities
                .iter()
                .map(|p| p.priority_number)
                .max()
                .unwrap_or(0)
                + 1;
            report.top3_priorities.push(TopPriority {
                priority_number: next_number,
                title: new.title,
                description: new.description,
                month1_tasks: Vec::new(),
                expected_result: new.expected_result,
                completed: false,
            });
        }
    }
}

/// All live sessions, keyed by the ulid token in the session cookie.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the token to use for this request, minting a fresh session
    /// when the cookie is absent or points at a session we no longer hold.
    pub fn resolve(&self, token: Option<String>) -> (String, bool) {
        let mut sessions = self.inner.lock().expect("session store lock poisoned");
        if let Some(token) = token {
            if sessions.contains_key(&token) {
                return (token, false);
            }
        }
        let token = ulid::Ulid::new().to_string();
        sessions.insert(token.clone(), Session::default());
        tracing::debug!(%token, "new session created");
        (token, true)
    }

    /// Run a closure against one session under the store lock. Returns
    /// `None` if the token is unknown (e.g. the process restarted).
    pub fn with_session<R>(&self, token: &str, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.inner.lock().expect("session store lock poisoned");
        sessions.get_mut(token).map(f)
    }
}
