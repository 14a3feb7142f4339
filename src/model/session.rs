// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Session state management.
//!
//! This module provides the session store: the credentials the user signed in
//! with and whether the backend accepted them. The store is a cloneable
//! handle shared between the UI thread and the task worker, state only ever
//! changes through [`SessionStore::login`] and [`SessionStore::logout`].

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

#[derive(Clone, Default, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) is_authenticated: bool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("is_authenticated", &self.is_authenticated)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Credentials to attach to outgoing requests, if any have been entered.
    pub(crate) fn credentials(&self) -> Option<Credentials> {
        if self.username.is_empty() && self.password.is_empty() {
            return None;
        }

        Some(Credentials::new(&self.username, &self.password))
    }
}

/// HTTP Basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    pub(crate) fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

#[derive(Clone, Default)]
pub(crate) struct SessionStore {
    inner: Arc<Mutex<Session>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a successful sign-in, all three fields change together.
    pub(crate) fn login(&self, username: &str, password: &str) {
        let mut session = self.lock();
        session.username = username.to_string();
        session.password = password.to_string();
        session.is_authenticated = true;
    }

    pub(crate) fn logout(&self) {
        *self.lock() = Session::default();
    }

    pub(crate) fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.lock().is_authenticated
    }

    pub(crate) fn credentials(&self) -> Option<Credentials> {
        self.lock().credentials()
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_unauthenticated() {
        let store = SessionStore::new();
        assert_eq!(store.snapshot(), Session::default());
        assert!(!store.is_authenticated());
        assert_eq!(store.credentials(), None);
    }

    #[test]
    fn login_sets_all_fields() {
        let store = SessionStore::new();
        store.login("alice", "secret");

        let session = store.snapshot();
        assert_eq!(session.username, "alice");
        assert_eq!(session.password, "secret");
        assert!(session.is_authenticated);
        assert_eq!(store.credentials(), Some(Credentials::new("alice", "secret")));
    }

    #[test]
    fn logout_clears_all_fields() {
        let store = SessionStore::new();
        store.login("alice", "secret");
        store.logout();

        assert_eq!(store.snapshot(), Session::default());
        assert_eq!(store.credentials(), None);
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let worker_handle = store.clone();

        store.login("bob", "hunter2");
        assert!(worker_handle.is_authenticated());

        worker_handle.logout();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn credentials_present_with_only_a_password() {
        let session = Session {
            username: String::new(),
            password: "pw".to_string(),
            is_authenticated: false,
        };
        assert_eq!(session.credentials(), Some(Credentials::new("", "pw")));
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("alice", "secret");
        assert!(!format!("{creds:?}").contains("secret"));

        let store = SessionStore::new();
        store.login("alice", "secret");
        assert!(!format!("{:?}", store.snapshot()).contains("secret"));
    }
}
