use axum::{Extension, middleware::AddExtension};
use std::sync::Arc;
use tower::Layer;

use crate::{
    config::SinkKind,
    sinks::profile::{EventProfileSink, ProfileSinkRef, StdoutProfileSink},
};

#[derive(Clone)]
pub struct ProfileSinkLayer(pub ProfileSinkRef);

impl ProfileSinkLayer {
    pub fn event() -> Self {
        Self(Arc::new(EventProfileSink::new()))
    }

    pub fn stdout() -> Self {
        Self(Arc::new(StdoutProfileSink::new()))
    }

    pub fn from_kind(kind: SinkKind) -> Self {
        match kind {
            SinkKind::Tracing => Self::event(),
            SinkKind::Stdout => Self::stdout(),
        }
    }
}

impl<S> Layer<S> for ProfileSinkLayer {
    type Service = AddExtension<S, ProfileSinkRef>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
