use crate::domain::model::User;
use crate::domain::ports::{Console, UserStore};
use crate::utils::error::{DemoError, Result};
use std::sync::{Arc, Mutex};

/// Stand-in database that records every created user.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> Vec<User> {
        match self.users.lock() {
            Ok(users) => users.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl UserStore for InMemoryUserStore {
    fn create_user(&self, name: &str, email: &str) -> Result<()> {
        let mut users = self.users.lock().map_err(|_| DemoError::PersistenceError {
            message: "user table lock poisoned".to_string(),
        })?;
        users.push(User {
            name: name.to_string(),
            email: email.to_string(),
        });
        tracing::debug!("Stored user {} ({} total)", name, users.len());
        Ok(())
    }
}

/// Stand-in database that reports each insert on a console.
pub struct ConsoleUserStore<'a> {
    console: &'a dyn Console,
}

impl<'a> ConsoleUserStore<'a> {
    pub fn new(console: &'a dyn Console) -> Self {
        Self { console }
    }
}

impl UserStore for ConsoleUserStore<'_> {
    fn create_user(&self, name: &str, email: &str) -> Result<()> {
        self.console
            .log(&format!("Created user {} <{}> in the database", name, email));
        Ok(())
    }
}
