use std::io::{self, Write};

use crate::models::Profile;

use super::ProfileSink;

pub const RECORD_PREFIX: &str = "Received profile:";

/// Writes `Received profile: fields=[...]` lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutProfileSink;

impl StdoutProfileSink {
    pub fn new() -> Self {
        Self
    }
}

pub fn format_record(profile: &Profile) -> String {
    format!("{RECORD_PREFIX} {profile}")
}

impl ProfileSink for StdoutProfileSink {
    fn record(&self, _req_id: &str, profile: &Profile) -> anyhow::Result<()> {
        // single write per record
        let line = format!("{}\n", format_record(profile));
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.flush()?;

        Ok(())
    }
}
