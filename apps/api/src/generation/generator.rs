//! Portfolio generation: one LLM call, then coercion.
//!
//! Flow: validate → build user message → LLM (single attempt) → strip fences + parse →
//!       normalize → image override → attach meta.
//!
//! Only unparseable output is an error. Valid JSON of the wrong shape is coerced.

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{NOT_PROVIDED, PORTFOLIO_PROMPT_TEMPLATE, PORTFOLIO_SYSTEM};
use crate::llm_client::LlmClient;
use crate::portfolio::coerce::normalize;
use crate::portfolio::intent::CoercionOptions;
use crate::portfolio::schema::{PortfolioData, PortfolioMeta};

/// Request body for portfolio generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub linkedin_text: String,
    /// Caller-supplied photo; always wins over whatever the model produced.
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub meta: Option<PortfolioMeta>,
}

impl GenerateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() && self.linkedin_text.trim().is_empty() {
            return Err(AppError::Validation(
                "At least one of resume_text or linkedin_text is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn user_message(&self) -> String {
        let or_placeholder = |s: &str| {
            let s = s.trim();
            if s.is_empty() {
                NOT_PROVIDED.to_string()
            } else {
                s.to_string()
            }
        };
        PORTFOLIO_PROMPT_TEMPLATE
            .replace("{resume_text}", &or_placeholder(&self.resume_text))
            .replace("{linkedin_text}", &or_placeholder(&self.linkedin_text))
    }
}

/// Runs the full pipeline against the LLM.
pub async fn generate_portfolio(
    llm: &LlmClient,
    options: &CoercionOptions,
    request: &GenerateRequest,
) -> Result<PortfolioData, AppError> {
    request.validate()?;

    info!(
        "Generating portfolio: resume_chars={}, linkedin_chars={}",
        request.resume_text.len(),
        request.linkedin_text.len()
    );

    let raw = llm
        .call_json_value(&request.user_message(), PORTFOLIO_SYSTEM)
        .await?;

    Ok(assemble_portfolio(&raw, request, options))
}

/// Everything after the LLM call. Pure.
pub fn assemble_portfolio(
    raw: &Value,
    request: &GenerateRequest,
    options: &CoercionOptions,
) -> PortfolioData {
    let mut data = normalize(raw, options);
    data.override_profile_image(request.profile_image_url.as_deref());
    data.meta = request.meta.clone().filter(|meta| {
        [&meta.name, &meta.linkedin_url, &meta.resume_url]
            .iter()
            .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    });
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(image: Option<&str>) -> GenerateRequest {
        GenerateRequest {
            resume_text: "Rust engineer".to_string(),
            profile_image_url: image.map(str::to_string),
            ..GenerateRequest::default()
        }
    }

    #[test]
    fn test_image_override_beats_generated_url() {
        let raw = json!({"profile_picture": {"content": {"image_url": "https://invented.example/me.png"}}});
        let data = assemble_portfolio(&raw, &request(Some("https://upload/me.jpg")), &CoercionOptions::default());
        assert_eq!(data.profile_picture.content.image_url.as_deref(), Some("https://upload/me.jpg"));
    }

    #[test]
    fn test_image_override_fills_missing_url() {
        let data = assemble_portfolio(&json!({}), &request(Some("https://upload/me.jpg")), &CoercionOptions::default());
        assert_eq!(data.profile_picture.content.image_url.as_deref(), Some("https://upload/me.jpg"));
    }

    #[test]
    fn test_no_override_keeps_generated_url() {
        let raw = json!({"profile_picture": {"content": {"image_url": "https://gen/me.png"}}});
        let data = assemble_portfolio(&raw, &request(None), &CoercionOptions::default());
        assert_eq!(data.profile_picture.content.image_url.as_deref(), Some("https://gen/me.png"));
    }

    #[test]
    fn test_meta_is_attached_when_present() {
        let mut req = request(None);
        req.meta = Some(PortfolioMeta {
            name: Some("Jane Doe".into()),
            ..PortfolioMeta::default()
        });
        let data = assemble_portfolio(&json!({}), &req, &CoercionOptions::default());
        assert_eq!(data.meta.and_then(|m| m.name).as_deref(), Some("Jane Doe"));

        req.meta = Some(PortfolioMeta::default());
        let data = assemble_portfolio(&json!({}), &req, &CoercionOptions::default());
        assert!(data.meta.is_none());
    }

    #[test]
    fn test_both_inputs_blank_is_validation_error() {
        let req = GenerateRequest {
            resume_text: "  ".into(),
            ..GenerateRequest::default()
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_user_message_placeholders() {
        let message = request(None).user_message();
        assert!(message.contains("## Resume Content\nRust engineer"));
        assert!(message.contains("## LinkedIn Profile Content\nNot provided"));
    }

    #[tokio::test]
    async fn test_generation_without_key_is_configuration_error() {
        let llm = LlmClient::new(None).unwrap();
        let err = generate_portfolio(&llm, &CoercionOptions::default(), &request(None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
