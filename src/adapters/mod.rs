// Adapters layer: concrete collaborators behind the domain ports.

pub mod console;
pub mod email;
pub mod user_store;

pub use console::{RecordingConsole, StdoutConsole};
pub use email::RegexEmailValidator;
pub use user_store::{ConsoleUserStore, InMemoryUserStore};
