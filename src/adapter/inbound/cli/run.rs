//! Command dispatch: wires config, stores and identity into the actions.

use crate::adapter::inbound::cli::command::{Cli, Command};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::identity::StaticIdentityResolver;
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations};
use crate::adapter::outbound::sqlite::{
    SqliteAccountStore, SqliteListingStore, SqliteSavedListingStore,
};
use crate::application::ListingActions;
use crate::config::Config;
use crate::domain::filter::FilterRequest;
use crate::domain::id::ListingId;
use crate::error::Result;
use crate::port::outbound::identity::IdentityResolver;

/// Execute the parsed command against the configured database.
pub async fn execute(cli: Cli, config: Config) -> Result<()> {
    let database_url = cli
        .db
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| config.database.url.clone());

    let pool = create_pool(&database_url, config.database.max_connections)?;
    run_migrations(&pool)?;

    let actions = ListingActions::new(
        SqliteListingStore::new(pool.clone()),
        SqliteAccountStore::new(pool.clone()),
        SqliteSavedListingStore::new(pool),
    );

    let resolver = StaticIdentityResolver::from_flag_or_env(cli.user.clone());
    let caller = resolver.resolve().await?;

    match cli.command {
        Command::Search(args) => {
            let request = FilterRequest::from(args);
            let envelope = actions.filtered_listings(&request, caller.as_ref()).await;
            if cli.json {
                return output::print_json(&envelope);
            }
            match envelope.data {
                Some(cards) if envelope.success => {
                    output::print_listings(&cards, envelope.pagination.as_ref());
                }
                _ => report_failure(envelope.error.as_deref()),
            }
        }
        Command::Catalog => {
            let envelope = actions.filter_catalog().await;
            if cli.json {
                return output::print_json(&envelope);
            }
            if !envelope.success {
                eprintln!("warning: catalog is degraded, showing defaults");
            }
            if let Some(catalog) = &envelope.data {
                output::print_catalog(catalog);
            }
        }
        Command::Show { id } => {
            let envelope = actions.listing(&ListingId::new(id), caller.as_ref()).await;
            if cli.json {
                return output::print_json(&envelope);
            }
            match envelope.data {
                Some(card) if envelope.success => output::print_listing(&card),
                _ => report_failure(envelope.error.as_deref()),
            }
        }
        Command::Save { id } => {
            // The toggle raises; a failure here propagates to main.
            let envelope = actions
                .toggle_saved(&ListingId::new(id), caller.as_ref())
                .await?;
            if cli.json {
                return output::print_json(&envelope);
            }
            if let Some(outcome) = envelope.data {
                println!("{}", outcome.message);
            }
        }
        Command::Saved => {
            let envelope = actions.saved_listings(caller.as_ref()).await;
            if cli.json {
                return output::print_json(&envelope);
            }
            match envelope.data {
                Some(cards) if envelope.success => output::print_listings(&cards, None),
                _ => report_failure(envelope.error.as_deref()),
            }
        }
        Command::Admin => {
            let envelope = actions.admin(caller.as_ref()).await;
            if cli.json {
                return output::print_json(&envelope);
            }
            match envelope.data {
                Some(gate) if envelope.success => {
                    println!(
                        "{}",
                        if gate.authorized {
                            "authorized"
                        } else {
                            "not authorized"
                        }
                    );
                }
                _ => report_failure(envelope.error.as_deref()),
            }
        }
        Command::Config => {
            if cli.json {
                return output::print_json(&config);
            }
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| crate::error::Error::Parse(e.to_string()))?;
            print!("{rendered}");
        }
    }

    Ok(())
}

fn report_failure(error: Option<&str>) {
    eprintln!("error: {}", error.unwrap_or("request failed"));
}
