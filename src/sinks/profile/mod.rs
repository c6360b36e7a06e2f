use mockall::automock;

use crate::models::Profile;

pub mod event;
pub mod stdout;
pub use event::EventProfileSink;
pub use stdout::StdoutProfileSink;

#[automock]
pub trait ProfileSink: Send + Sync {
    /// Report a received profile. Callers discard the result.
    fn record(&self, req_id: &str, profile: &Profile) -> anyhow::Result<()>;
}

pub type ProfileSinkRef = std::sync::Arc<dyn ProfileSink + Send + Sync>;
