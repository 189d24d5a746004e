//! Auth service
//!
//! Credential check against the locally stored user list, with the current
//! user mirrored into the session key so a reload preserves the login.
//! Passwords are compared in plaintext exactly as stored — a documented
//! limitation of this system, carried over rather than silently hardened.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::{SESSION_KEY, USERS_KEY};
use crate::error::{AppError, Result};
use crate::models::{SessionUser, User, UserRole};
use crate::notify::{Notification, Notifier};
use crate::seed;
use crate::storage::Store;

/// Service for login, session and user management
#[derive(Clone)]
pub struct AuthService {
    store: Store,
    notifier: Arc<dyn Notifier>,
}

impl AuthService {
    pub fn new(store: Store, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// The stored accounts, seeding the super-admin on first read and
    /// healing the collection when it no longer parses
    pub fn users(&self) -> Vec<User> {
        match self.store.read::<Vec<User>>(USERS_KEY) {
            Ok(Some(users)) => users,
            Ok(None) => self.reseed(),
            Err(err) => {
                tracing::warn!("Users collection unreadable ({}), reseeding", err);
                self.reseed()
            }
        }
    }

    fn reseed(&self) -> Vec<User> {
        let users = seed::default_users();
        if let Err(err) = self.store.write(USERS_KEY, &users) {
            tracing::warn!("Failed to persist users seed: {}", err);
        }
        users
    }

    /// Check credentials; on success the user (password stripped) becomes
    /// the persisted session. Returns whether the login succeeded.
    pub fn login(&self, email: &str, password: &str) -> Result<bool> {
        let users = self.users();

        match users
            .iter()
            .find(|u| u.email == email && u.password == password)
        {
            Some(user) => {
                let session = user.session();
                self.store.write(SESSION_KEY, &session)?;

                tracing::info!("User logged in: {}", session.id);
                self.notifier
                    .notify(Notification::success("Success", "Logged in successfully"));
                Ok(true)
            }
            None => {
                self.notifier
                    .notify(Notification::error("Error", "Invalid email or password"));
                Ok(false)
            }
        }
    }

    /// Clear the persisted session
    pub fn logout(&self) -> Result<()> {
        self.store.remove(SESSION_KEY)?;

        tracing::info!("User logged out");
        self.notifier.notify(Notification::success(
            "Logged out",
            "You have been logged out successfully",
        ));
        Ok(())
    }

    /// The authenticated user, if any. An unparseable session entry is
    /// cleared and treated as logged out.
    pub fn current_user(&self) -> Option<SessionUser> {
        match self.store.read::<SessionUser>(SESSION_KEY) {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("Session entry unreadable ({}), clearing", err);
                let _ = self.store.remove(SESSION_KEY);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Append a new admin account. Only a super-admin may do this; created
    /// accounts always get the `admin` role. Users are append-only — there
    /// is no update or delete.
    pub fn add_user(&self, email: &str, password: &str, name: &str) -> Result<User> {
        match self.current_user() {
            Some(user) if user.role == UserRole::SuperAdmin => {}
            _ => {
                let err = AppError::PermissionDenied("add users".to_string());
                self.notifier.notify(err.notification());
                return Err(err);
            }
        }

        let email = email.trim();
        let name = name.trim();
        if email.is_empty() || !email.contains('@') {
            let err = AppError::validation("email", "Please enter a valid email address");
            self.notifier.notify(err.notification());
            return Err(err);
        }
        if name.is_empty() || password.is_empty() {
            let err = AppError::validation("form", "Please fill in all required fields");
            self.notifier.notify(err.notification());
            return Err(err);
        }

        let mut users = self.users();
        if users.iter().any(|u| u.email == email) {
            let err = AppError::validation("email", "User with this email already exists");
            self.notifier.notify(err.notification());
            return Err(err);
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role: UserRole::Admin,
            password: password.to_string(),
        };
        users.push(user.clone());
        self.store.write(USERS_KEY, &users)?;

        tracing::info!("User added: {}", user.id);
        self.notifier
            .notify(Notification::success("Success", "User added successfully"));
        Ok(user)
    }
}
