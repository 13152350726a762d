//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::domain::filter::{FacetFilter, FilterRequest};

#[derive(Debug, Parser)]
#[command(name = "autolot", version, about = "Car-marketplace listing actions")]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path, overriding the configured one.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Act as this identity-provider user id.
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Emit the raw response envelope as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search available listings with optional filters.
    Search(SearchArgs),
    /// Show the distinct facet values and price bounds.
    Catalog,
    /// Show one listing by id, whatever its status.
    Show {
        /// Listing id.
        id: String,
    },
    /// Toggle a listing in the current user's favorites.
    Save {
        /// Listing id.
        id: String,
    },
    /// List the current user's saved listings.
    Saved,
    /// Check whether the current user is an authorized admin.
    Admin,
    /// Print the effective configuration, shield rules included.
    Config,
}

#[derive(Debug, Args, Default)]
pub struct SearchArgs {
    /// Filter by make; repeat for set membership.
    #[arg(long)]
    pub make: Vec<String>,

    /// Filter by body type; repeat for set membership.
    #[arg(long)]
    pub body_type: Vec<String>,

    /// Filter by fuel type; repeat for set membership.
    #[arg(long)]
    pub fuel_type: Vec<String>,

    /// Filter by transmission; repeat for set membership.
    #[arg(long)]
    pub transmission: Vec<String>,

    /// Minimum price, inclusive.
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Maximum price, inclusive.
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Case-insensitive substring over make, model and color.
    #[arg(long)]
    pub search: Option<String>,

    /// 1-based page number.
    #[arg(long)]
    pub page: Option<i64>,

    /// Listings per page.
    #[arg(long)]
    pub limit: Option<i64>,
}

impl From<SearchArgs> for FilterRequest {
    fn from(args: SearchArgs) -> Self {
        Self {
            make: FacetFilter::from_values(args.make),
            body_type: FacetFilter::from_values(args.body_type),
            fuel_type: FacetFilter::from_values(args.fuel_type),
            transmission: FacetFilter::from_values(args.transmission),
            min_price: args.min_price,
            max_price: args.max_price,
            search: args.search,
            page: args.page,
            page_size: args.limit,
        }
    }
}
