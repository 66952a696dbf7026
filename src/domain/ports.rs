use crate::domain::model::{Principle, SalaryDetails, Variant};
use crate::utils::error::Result;

/// Sink for the text lines every demo produces.
pub trait Console {
    fn log(&self, line: &str);
}

/// The email-validation collaborator the signup flow depends on.
pub trait EmailValidator {
    fn is_valid(&self, email: &str) -> bool;
}

/// The database-persistence collaborator the signup flow depends on.
pub trait UserStore {
    fn create_user(&self, name: &str, email: &str) -> Result<()>;
}

/// A collection that knows how to announce its own items.
pub trait LogItems {
    fn log_items(&self, console: &dyn Console);
}

/// Base contract for anyone on the payroll.
pub trait Staff {
    fn name(&self) -> &str;
    fn id(&self) -> u32;
    fn department(&self) -> &str;
    /// Promised to return `SalaryDetails::Basic`.
    fn salary_details(&self) -> SalaryDetails;
}

pub trait Calculate {
    fn calculate(&self) -> i64;
}

pub trait Print {
    fn print(&self, console: &dyn Console) -> Result<()>;
}

/// Monolithic capability set: implementors must provide both operations.
pub trait CalculatePrint {
    fn calculate(&self) -> i64;
    fn print(&self, console: &dyn Console) -> Result<()>;
}

/// A replaceable part of an assembly.
pub trait Action {
    fn action(&self, console: &dyn Console);
}

pub trait Demo {
    fn principle(&self) -> Principle;
    fn variants(&self) -> &'static [Variant];
    fn run(&self, variant: Variant, console: &dyn Console) -> Result<()>;
}
