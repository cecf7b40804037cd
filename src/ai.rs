//! AI delegation layer: enhanced search and HTS code suggestions.
//!
//! Everything here is optional and fully isolated from the core engine. Every
//! remote call runs under a timeout and has a deterministic fallback: enhanced
//! search falls back to [`SearchEngine::search`], HTS generation falls back to
//! a static lookup keyed on material type. The core never calls this module;
//! only the binary does.

use crate::catalog::Product;
use crate::config::Settings;
use crate::error::Result;
use crate::search::{FilterCriteria, MatchReason, ScoredResult, SearchEngine};
use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Cap on products included in the enhanced-search prompt.
const MAX_PROMPT_PRODUCTS: usize = 20;
/// Cap on keywords per product summary in the prompt.
const MAX_PROMPT_KEYWORDS: usize = 5;

/// An HTS (Harmonized Tariff Schedule) classification suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtsCodeSuggestion {
    pub code: String,
    pub description: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct AiService {
    client: Client,
    api_key: String,
    api_base: String,
    search_model: String,
    hts_model: String,
    timeout: Duration,
}

impl AiService {
    /// Build a service from settings, or `None` when no API key is configured.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        let api_key = settings.api_key.clone()?;
        Some(Self {
            client: Client::new(),
            api_key,
            api_base: settings.api_base.clone(),
            search_model: settings.search_model.clone(),
            hts_model: settings.hts_model.clone(),
            timeout: settings.ai_timeout,
        })
    }

    /// Rank products for a natural-language query via the model.
    ///
    /// Any failure (HTTP error, timeout, unusable reply) falls back to the
    /// core engine's basic search; this method never errors.
    pub async fn enhanced_search(
        &self,
        engine: &SearchEngine,
        query: &str,
        limit: usize,
    ) -> Vec<ScoredResult> {
        match self.ranked_product_ids(engine, query).await {
            Ok(product_ids) => {
                let results: Vec<ScoredResult> = product_ids
                    .iter()
                    .take(limit)
                    .enumerate()
                    .filter_map(|(rank, id)| {
                        engine.catalog().get_by_id(id).map(|product| ScoredResult {
                            product,
                            // Decreasing score by rank position.
                            score: 100.0 - (rank as f64) * 5.0,
                            reasons: vec![MatchReason::AiEnhanced],
                        })
                    })
                    .collect();
                results
            }
            Err(e) => {
                tracing::warn!("Enhanced search failed, using basic search: {:#}", e);
                engine.search(query, limit, &FilterCriteria::default()).0
            }
        }
    }

    async fn ranked_product_ids(
        &self,
        engine: &SearchEngine,
        query: &str,
    ) -> Result<Vec<String>> {
        let products = engine.catalog().get_all();
        let summaries: Vec<_> = products
            .iter()
            .take(MAX_PROMPT_PRODUCTS)
            .map(|p| {
                json!({
                    "id": p.id,
                    "title": p.title,
                    "product_code": p.product_code,
                    "joint_type": p.joint_type,
                    "body_design": p.body_design,
                    "size_range": p.specifications.size_range,
                    "keywords": p.metadata.keywords.iter().take(MAX_PROMPT_KEYWORDS).collect::<Vec<_>>(),
                })
            })
            .collect();

        let prompt = format!(
            "Given this user search query: \"{}\"\n\n\
             And this list of products: {}\n\n\
             Identify the most relevant products and return a JSON array of product IDs \
             ranked by relevance. Consider natural language patterns, synonyms, and intent.\n\n\
             Return only a JSON array of product IDs, like: [\"product-id-1\", \"product-id-2\"]",
            query,
            serde_json::to_string(&summaries)?,
        );

        let reply = self
            .chat(
                &self.search_model,
                "You are a product search assistant. Return only valid JSON.",
                &prompt,
                500,
                0.1,
            )
            .await?;

        let cleaned = strip_code_fences(&reply);
        match serde_json::from_str::<Vec<String>>(cleaned) {
            Ok(ids) => Ok(ids),
            // Salvage IDs by substring scan before giving up on the reply.
            Err(_) => Ok(extract_product_ids(cleaned, products)),
        }
    }

    /// Suggest HTS classifications for a product.
    ///
    /// Falls back to [`fallback_hts_codes`] on any failure; never errors.
    pub async fn suggest_hts_codes(&self, product: &Product) -> Vec<HtsCodeSuggestion> {
        let product_info = format!(
            "Product: {}\n\
             Product Code: {}\n\
             Material: {} ({})\n\
             Joint Type: {}\n\
             Body Design: {}\n\
             Size Range: {}\n\
             Primary Standard: {}\n\
             Application: Water and sewer pipe fittings\n\
             Construction: {}\n\
             Coatings: Interior - {}, Exterior - {}",
            product.title,
            product.product_code,
            product.specifications.material.kind,
            product.specifications.material.standard,
            product.joint_type,
            product.body_design,
            product.specifications.size_range,
            product.primary_standard,
            product.construction.lining,
            product.construction.coating.interior,
            product.construction.coating.exterior,
        );

        let prompt = format!(
            "Based on the following product specification, suggest the most appropriate \
             HTS (Harmonized Tariff Schedule) codes:\n\n{}\n\n\
             Provide 2-3 HTS code suggestions with confidence levels and reasoning. \
             This is an industrial-grade ductile iron pipe fitting for water/sewer \
             applications, manufactured to AWWA standards.\n\n\
             Return your response as a JSON array with this format:\n\
             [{{\"code\": \"HTS.CODE.HERE\", \"description\": \"...\", \
             \"confidence\": 0.85, \"reasoning\": \"...\"}}]",
            product_info,
        );

        let parsed = match self
            .chat(
                &self.hts_model,
                "You are an expert in HTS codes for industrial products. Return only valid JSON.",
                &prompt,
                1000,
                0.2,
            )
            .await
        {
            Ok(reply) => serde_json::from_str::<Vec<HtsCodeSuggestion>>(strip_code_fences(&reply))
                .map_err(|e| tracing::warn!("Failed to parse HTS response: {}", e))
                .ok(),
            Err(e) => {
                tracing::warn!("HTS generation failed: {:#}", e);
                None
            }
        };

        parsed.unwrap_or_else(|| fallback_hts_codes(product))
    }

    /// Single chat-completions call under the configured timeout.
    async fn chat(
        &self,
        model: &str,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f64,
    ) -> Result<String> {
        let body = json!({
            "model": model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "max_tokens": max_tokens,
            "temperature": temperature,
        });

        let request = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .context("AI request timed out")?
            .context("AI request failed")?
            .error_for_status()
            .context("AI request returned an error status")?;

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Failed to decode AI response body")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("AI response contained no choices")?;

        Ok(content.trim().to_string())
    }
}

/// Strip a surrounding markdown code fence from a model reply, if present.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Scan a free-form reply for known product IDs, preserving catalog order.
fn extract_product_ids(reply: &str, products: &[Arc<Product>]) -> Vec<String> {
    products
        .iter()
        .filter(|p| reply.contains(&p.id))
        .map(|p| p.id.clone())
        .take(10)
        .collect()
}

/// Static HTS fallback keyed on material-type substring.
pub fn fallback_hts_codes(product: &Product) -> Vec<HtsCodeSuggestion> {
    if product
        .specifications
        .material
        .kind
        .to_lowercase()
        .contains("ductile iron")
    {
        return vec![
            HtsCodeSuggestion {
                code: "7307.99.1000".to_string(),
                description: "Other tube or pipe fittings of iron or steel".to_string(),
                confidence: 0.7,
                reasoning: Some("General category for iron pipe fittings".to_string()),
            },
            HtsCodeSuggestion {
                code: "8481.80.9090".to_string(),
                description: "Other valves and similar articles".to_string(),
                confidence: 0.5,
                reasoning: Some(
                    "Alternative classification for pipe connection components".to_string(),
                ),
            },
        ];
    }
    vec![]
}
