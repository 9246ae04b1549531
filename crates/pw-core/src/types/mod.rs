pub mod io;

pub use io::NewActivityInput;
pub use pw_events::types::{ActivityId, ActivityRecord, Status, Subject};
