//! Story and task value objects.
//!
//! Both types deserialize through a private record type so that the
//! non-empty summary check runs no matter how the value is built.

mod story;
mod task;

pub use story::Story;
pub use task::Task;

fn require_summary(kind: &str, summary: &str) -> Result<(), String> {
    if summary.trim().is_empty() {
        return Err(format!("{kind} summary must not be empty"));
    }
    Ok(())
}
