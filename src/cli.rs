use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fitting-search")]
#[command(about = "Search a ductile-iron pipe fitting catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keyword search with optional structured filters.
    Search {
        query: String,
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
        /// Delegate ranking to the AI layer (falls back to basic search).
        #[arg(long)]
        enhanced: bool,
        #[arg(long)]
        joint_type: Option<String>,
        #[arg(long)]
        product_code: Option<String>,
        #[arg(long)]
        body_design: Option<String>,
        #[arg(long)]
        min_pressure: Option<i64>,
        #[arg(long)]
        max_pressure: Option<i64>,
        #[arg(long)]
        size: Option<String>,
    },
    /// Autocomplete suggestions for a partial query.
    Suggest {
        partial: String,
        #[arg(short = 'n', long, default_value = "8")]
        limit: usize,
    },
    /// Show a single product by identifier.
    Show { product_id: String },
    /// Products similar to a reference product.
    Similar {
        product_id: String,
        #[arg(short = 'n', long, default_value = "5")]
        limit: usize,
    },
    /// HTS tariff-code suggestions for a product.
    Hts { product_id: String },
    /// List available filter option values.
    Filters,
}
