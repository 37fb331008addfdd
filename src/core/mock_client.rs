//! Scripted backend client for testing without a live project
//!
//! Each call takes the next scripted reply; the final reply repeats for all
//! later calls. Call counts and the last query are recorded for assertions.

use super::client::{AuthResponse, BackendClient, QueryResponse, RowQuery};
use crate::models::{Session, User};
use crate::utils::BackendError;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

type Reply<T> = Result<T, BackendError>;

struct Script<T: Clone> {
    replies: Mutex<VecDeque<Reply<T>>>,
    calls: AtomicU32,
}

impl<T: Clone> Script<T> {
    fn new(first: Reply<T>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([first])),
            calls: AtomicU32::new(0),
        }
    }

    fn push(&self, reply: Reply<T>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    fn next(&self) -> Reply<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut replies = self.replies.lock().unwrap();
        if replies.len() > 1 {
            replies.pop_front().unwrap()
        } else {
            replies.front().cloned().unwrap()
        }
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Mock backend client for testing
pub struct MockBackendClient {
    sessions: Script<AuthResponse>,
    queries: Script<QueryResponse>,
    last_query: Mutex<Option<RowQuery>>,
}

impl MockBackendClient {
    /// Signed out, no profile rows
    pub fn new() -> Self {
        Self {
            sessions: Script::new(Ok(AuthResponse::signed_out())),
            queries: Script::new(Ok(QueryResponse::empty())),
            last_query: Mutex::new(None),
        }
    }

    /// Signed in as `user_id` with the given profile row
    pub fn signed_in(user_id: &str, row: serde_json::Value) -> Self {
        Self {
            sessions: Script::new(Ok(AuthResponse::session(Session::for_user(User::new(
                user_id,
            ))))),
            queries: Script::new(Ok(QueryResponse::row(row))),
            last_query: Mutex::new(None),
        }
    }

    /// Replace the session script with a single repeating reply
    pub fn session_reply(mut self, reply: Reply<AuthResponse>) -> Self {
        self.sessions = Script::new(reply);
        self
    }

    /// Append a session reply after the current ones
    pub fn then_session(self, reply: Reply<AuthResponse>) -> Self {
        self.sessions.push(reply);
        self
    }

    /// Replace the query script with a single repeating reply
    pub fn query_reply(mut self, reply: Reply<QueryResponse>) -> Self {
        self.queries = Script::new(reply);
        self
    }

    /// Append a query reply after the current ones
    pub fn then_query(self, reply: Reply<QueryResponse>) -> Self {
        self.queries.push(reply);
        self
    }

    pub fn session_calls(&self) -> u32 {
        self.sessions.calls()
    }

    pub fn query_calls(&self) -> u32 {
        self.queries.calls()
    }

    pub fn last_query(&self) -> Option<RowQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

impl Default for MockBackendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BackendClient for MockBackendClient {
    async fn get_session(&self) -> Result<AuthResponse, BackendError> {
        self.sessions.next()
    }

    async fn select_single(&self, query: &RowQuery) -> Result<QueryResponse, BackendError> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.queries.next()
    }
}
