use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
}

struct Session {
    role: Role,
    expires_at: Instant,
}

/// In-process session table mapping opaque tokens to roles. Sessions expire
/// after `ttl` and do not survive a restart.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn start(&self, role: Role) -> String {
        let token = Uuid::new_v4().simple().to_string();
        let now = Instant::now();

        let mut sessions = self.lock();
        // Logins that never log out are dropped here once stale
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                role,
                expires_at: now + self.ttl,
            },
        );
        token
    }

    pub fn resolve(&self, token: &str) -> Option<Role> {
        let mut sessions = self.lock();
        let (role, expires_at) = sessions.get(token).map(|s| (s.role, s.expires_at))?;
        if expires_at <= Instant::now() {
            sessions.remove(token);
            return None;
        }
        Some(role)
    }

    pub fn end(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }
}

/// Credential check for the single admin account.
pub fn credentials_match(username: &str, password: &str, expected_user: &str, expected_pass: &str) -> bool {
    !expected_pass.is_empty() && username == expected_user && password == expected_pass
}
