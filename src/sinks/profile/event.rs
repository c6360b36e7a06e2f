use tracing::{info, instrument};

use crate::models::Profile;

use super::ProfileSink;

/// Emits each received profile as a structured `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventProfileSink;

impl EventProfileSink {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileSink for EventProfileSink {
    #[instrument(name = "event_profile_sink.record", skip_all)]
    fn record(&self, req_id: &str, profile: &Profile) -> anyhow::Result<()> {
        info!(
            msg = "Received profile:",
            req_id = %req_id,
            field_count = profile.fields.len(),
            profile = %profile
        );

        Ok(())
    }
}
