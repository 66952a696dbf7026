//! Single responsibility: validation and persistence change for different
//! reasons, so they live in different functions.

use crate::adapters::{ConsoleUserStore, RegexEmailValidator};
use crate::domain::model::{Principle, SignupRequest, Variant};
use crate::domain::ports::{Console, Demo, EmailValidator, UserStore};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Created,
    Skipped,
}

/// Flawed: one function owns both the email rule and the database call.
pub fn create_user_bad_way<V, S>(validator: &V, store: &S, name: &str, email: &str) -> Result<()>
where
    V: EmailValidator + ?Sized,
    S: UserStore + ?Sized,
{
    if validator.is_valid(email) {
        store.create_user(name, email)?;
    }
    Ok(())
}

/// Persists unconditionally. Callers are responsible for validation.
pub fn create_user<S: UserStore + ?Sized>(store: &S, name: &str, email: &str) -> Result<()> {
    store.create_user(name, email)
}

/// Checks the request's email and hands valid requests to [`create_user`].
///
/// An invalid email is skipped without an error.
pub fn validate_request<V, S>(validator: &V, store: &S, request: &SignupRequest) -> Result<SignupOutcome>
where
    V: EmailValidator + ?Sized,
    S: UserStore + ?Sized,
{
    if !validator.is_valid(&request.email) {
        tracing::debug!("Skipping signup for {}", request.name);
        return Ok(SignupOutcome::Skipped);
    }

    create_user(store, &request.name, &request.email)?;
    Ok(SignupOutcome::Created)
}

pub struct SrpDemo {
    requests: Vec<SignupRequest>,
    validator: RegexEmailValidator,
}

impl SrpDemo {
    pub fn new(requests: Vec<SignupRequest>) -> Result<Self> {
        Ok(Self {
            requests,
            validator: RegexEmailValidator::new()?,
        })
    }
}

impl Demo for SrpDemo {
    fn principle(&self) -> Principle {
        Principle::Srp
    }

    fn variants(&self) -> &'static [Variant] {
        &[Variant::Flawed, Variant::Improved]
    }

    fn run(&self, variant: Variant, console: &dyn Console) -> Result<()> {
        let store = ConsoleUserStore::new(console);
        for request in &self.requests {
            match variant {
                Variant::Flawed => {
                    create_user_bad_way(&self.validator, &store, &request.name, &request.email)?
                }
                Variant::Improved => {
                    validate_request(&self.validator, &store, request)?;
                }
            }
        }
        Ok(())
    }
}
