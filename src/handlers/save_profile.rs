use axum::{Extension, Json, http::Extensions};
use tracing::instrument;

use crate::{
    extract::ProfileJson,
    models::{Profile, SaveProfileResponse},
    request_id,
    sinks::profile::ProfileSinkRef,
};

#[instrument(name = "handlers.save_profile", skip_all)]
pub async fn save_profile_handler(
    Extension(sink): Extension<ProfileSinkRef>,
    extensions: Extensions,
    ProfileJson(profile): ProfileJson<Profile>,
) -> Json<SaveProfileResponse> {
    // Diagnostic only, the acknowledgement never depends on it
    let _ = sink.record(request_id::current(&extensions), &profile);

    Json(SaveProfileResponse::saved(profile))
}
