pub mod cli;
pub mod compose;
pub mod display;
pub mod event;
pub mod ics;
pub mod server;
pub mod transport;
pub mod validate;

pub use compose::compose;
pub use event::{Event, EventDraft, Organizer};
pub use self::ics::{export, ExportError};
pub use validate::{validate, Violation, ViolationKind};
