use clap::Parser;
use fitting_search::ai::{AiService, fallback_hts_codes};
use fitting_search::cli::{Cli, Commands};
use fitting_search::config::Settings;
use fitting_search::error::{CatalogError, Result};
use fitting_search::search::clean_query;
use fitting_search::{Catalog, FilterCriteria, SearchEngine};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;

/// Minimum partial-query length for suggestions.
const MIN_SUGGEST_LEN: usize = 2;

#[tokio::main]
async fn main() -> Result<()> {
    fitting_search::tracing::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let catalog = Arc::new(Catalog::load(&settings.catalog_path)?);
    let engine = SearchEngine::new(Arc::clone(&catalog));

    match cli.command {
        Commands::Search {
            query,
            limit,
            enhanced,
            joint_type,
            product_code,
            body_design,
            min_pressure,
            max_pressure,
            size,
        } => {
            let query = clean_query(&query);
            if query.is_empty() {
                anyhow::bail!("search query cannot be empty");
            }

            let mut raw: HashMap<String, Value> = HashMap::new();
            insert_filter(&mut raw, "joint_type", joint_type.map(Value::from));
            insert_filter(&mut raw, "product_code", product_code.map(Value::from));
            insert_filter(&mut raw, "body_design", body_design.map(Value::from));
            insert_filter(&mut raw, "min_pressure", min_pressure.map(Value::from));
            insert_filter(&mut raw, "max_pressure", max_pressure.map(Value::from));
            insert_filter(&mut raw, "size", size.map(Value::from));
            let filters = FilterCriteria::validate(&raw);

            let results = if enhanced {
                match AiService::from_settings(&settings) {
                    Some(ai) => ai.enhanced_search(&engine, &query, limit).await,
                    None => {
                        tracing::warn!("No API key configured; using basic search");
                        engine.search(&query, limit, &filters).0
                    }
                }
            } else {
                let (results, elapsed_ms) = engine.search(&query, limit, &filters);
                println!("{} results in {}ms", results.len(), elapsed_ms);
                results
            };

            for result in results {
                println!(
                    "{:>7.1}  {}  [{}]",
                    result.score,
                    result.product.summary(),
                    result.match_reason()
                );
            }
        }
        Commands::Suggest { partial, limit } => {
            if partial.trim().len() < MIN_SUGGEST_LEN {
                anyhow::bail!("partial query must be at least {} characters", MIN_SUGGEST_LEN);
            }
            for suggestion in engine.suggest(&partial, limit) {
                println!("{}", suggestion);
            }
        }
        Commands::Show { product_id } => {
            let product =
                catalog
                    .get_by_id(&product_id)
                    .ok_or_else(|| CatalogError::ProductNotFound {
                        product_id: product_id.clone(),
                    })?;
            println!("{}", serde_json::to_string_pretty(&*product)?);
        }
        Commands::Similar { product_id, limit } => {
            for result in engine.similar(&product_id, limit)? {
                println!("{:>7.1}  {}", result.score, result.product.summary());
            }
        }
        Commands::Hts { product_id } => {
            let product =
                catalog
                    .get_by_id(&product_id)
                    .ok_or_else(|| CatalogError::ProductNotFound {
                        product_id: product_id.clone(),
                    })?;

            let suggestions = match AiService::from_settings(&settings) {
                Some(ai) => ai.suggest_hts_codes(&product).await,
                None => {
                    tracing::warn!("No API key configured; using static HTS lookup");
                    fallback_hts_codes(&product)
                }
            };

            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        Commands::Filters => {
            let options = json!({
                "product_codes": catalog.product_codes(),
                "joint_types": catalog.joint_types(),
                "body_designs": catalog.body_designs(),
            });
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }

    Ok(())
}

fn insert_filter(raw: &mut HashMap<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        raw.insert(key.to_string(), value);
    }
}
