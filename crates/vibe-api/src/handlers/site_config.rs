use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use vibe_core::domain::SiteConfiguration;
use vibe_core::services::SiteConfigService;

use crate::error::ApiError;
use crate::response::ApiResponse;

/// The configuration row plus the derived video identifier (`null` when the
/// URL is not a recognized video link).
#[derive(Debug, Serialize)]
pub struct SiteConfigView {
    #[serde(flatten)]
    pub config: SiteConfiguration,
    pub video_id: Option<String>,
}

impl From<SiteConfiguration> for SiteConfigView {
    fn from(config: SiteConfiguration) -> Self {
        let video_id = config.video_id().map(str::to_string);
        Self { config, video_id }
    }
}

/// Site config handler - GET /api/v1/common/config
pub async fn get_site_config(
    State(service): State<Arc<SiteConfigService>>,
) -> Result<Json<ApiResponse<SiteConfigView>>, ApiError> {
    let config = service.load().await?;
    Ok(Json(ApiResponse::success(config.into())))
}
