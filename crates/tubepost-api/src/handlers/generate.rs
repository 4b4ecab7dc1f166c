//! Article generation handler: the pipeline sequencer.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use tubepost_ai::{GenerationMode, SynthesizedArticle};
use tubepost_images::ImageStrategy;
use tubepost_models::{ArticleRecord, ImageAsset, RecoveryTier, SeoAnalysis};

use crate::error::ApiResult;
use crate::state::AppState;

/// Generation request: the resolved video text plus variant selectors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub transcript: String,
    #[serde(default)]
    pub video_id: String,
    #[serde(default)]
    pub mode: GenerationMode,
    #[serde(default)]
    pub image_strategy: ImageStrategy,
}

/// Merged pipeline response: the article plus enrichment.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub article: ArticleRecord,
    /// Which recovery tier produced the article
    pub recovery: RecoveryTier,
    pub seo_analysis: SeoAnalysis,
    pub images: Vec<ImageAsset>,
    pub video_id: String,
}

/// Run the generation pipeline: synthesize the article, then enrich with
/// keyword metrics and images concurrently.
///
/// Standard mode always answers 200 with a renderable record; extended mode
/// and resolver-stage failures surface as errors. Enrichment never fails.
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<GenerateResponse>> {
    info!(step = 1, video_id = %request.video_id, mode = ?request.mode, "Synthesizing article");

    let SynthesizedArticle { record, tier } = state
        .ai
        .generate_article(
            &request.title,
            &request.description,
            &request.transcript,
            request.mode,
        )
        .await?;

    let keyword = record.keywords.first().cloned().unwrap_or_default();

    info!(step = 2, tier = %tier, keyword = %keyword, "Enriching with metrics and images");

    let (seo_analysis, images) = tokio::join!(
        state.seo.analyze(&keyword),
        state
            .images
            .provision(&record.image_descriptions, request.image_strategy)
    );

    info!(step = 3, images = images.len(), "Pipeline complete");

    Ok(Json(GenerateResponse {
        article: record,
        recovery: tier,
        seo_analysis,
        images,
        video_id: request.video_id,
    }))
}
