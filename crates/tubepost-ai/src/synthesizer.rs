//! Article generation with tiered response recovery.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tubepost_models::{ArticleRecord, RecoveryTier};

use crate::client::AiClient;
use crate::error::{AiError, AiResult};
use crate::prompt::{
    build_extended_prompt, build_standard_prompt, EXTENDED_SYSTEM_PROMPT, STANDARD_SYSTEM_PROMPT,
};
use crate::recover::recover_article;

/// Generation mode: one canonical schema, two completion variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Required fields only; full three-tier recovery
    #[default]
    Standard,
    /// Richer schema and token budget; strict parse only, failures propagate
    Extended,
}

/// An article record together with the recovery tier that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedArticle {
    pub record: ArticleRecord,
    pub tier: RecoveryTier,
}

impl AiClient {
    /// Generate an article from the resolved video text.
    ///
    /// Standard mode never fails: a provider failure yields a record
    /// synthesized from the inputs, a malformed completion goes through
    /// pattern extraction. Extended mode propagates both failure classes.
    pub async fn generate_article(
        &self,
        title: &str,
        description: &str,
        transcript: &str,
        mode: GenerationMode,
    ) -> AiResult<SynthesizedArticle> {
        match mode {
            GenerationMode::Standard => Ok(self
                .generate_standard(title, description, transcript)
                .await),
            GenerationMode::Extended => self.generate_extended(title, description, transcript).await,
        }
    }

    async fn generate_standard(
        &self,
        title: &str,
        description: &str,
        transcript: &str,
    ) -> SynthesizedArticle {
        let prompt = build_standard_prompt(title, description, transcript);
        let max_tokens = self.config.standard_max_tokens;

        let raw = match self
            .complete(STANDARD_SYSTEM_PROMPT, &prompt, max_tokens)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Completion call failed, synthesizing article from inputs");
                return SynthesizedArticle {
                    record: synthesized_article(title, description),
                    tier: RecoveryTier::Synthesized,
                };
            }
        };

        match parse_strict(&raw) {
            Ok(record) => {
                info!(tier = %RecoveryTier::Strict, "Article parsed");
                SynthesizedArticle {
                    record,
                    tier: RecoveryTier::Strict,
                }
            }
            Err(e) => {
                warn!(error = %e, "Completion failed strict parse, extracting fields");
                SynthesizedArticle {
                    record: recover_article(&raw),
                    tier: RecoveryTier::Extracted,
                }
            }
        }
    }

    async fn generate_extended(
        &self,
        title: &str,
        description: &str,
        transcript: &str,
    ) -> AiResult<SynthesizedArticle> {
        let prompt = build_extended_prompt(title, description, transcript);
        let raw = self
            .complete(EXTENDED_SYSTEM_PROMPT, &prompt, self.config.extended_max_tokens)
            .await?;

        let record = parse_strict(&raw).map_err(|e| AiError::MalformedCompletion(e.to_string()))?;

        Ok(SynthesizedArticle {
            record,
            tier: RecoveryTier::Strict,
        })
    }
}

/// Tier 1: strict parse requiring all four article keys.
fn parse_strict(raw: &str) -> Result<ArticleRecord, serde_json::Error> {
    serde_json::from_str(raw.trim())
}

/// Tier 3: no completion at all; wrap the request inputs in minimal HTML.
fn synthesized_article(title: &str, description: &str) -> ArticleRecord {
    ArticleRecord::basic(
        format!("SEO-Optimized: {title}"),
        format!(
            "<h1>{title}</h1><p>{description}</p><p>We apologize, but we couldn't generate \
             the full content at this time. Please try again later.</p>"
        ),
        ["default", "keyword", "seo", "content", "blog"]
            .into_iter()
            .map(String::from)
            .collect(),
        (1..=5).map(|i| format!("Default image {i}")).collect(),
    )
}
