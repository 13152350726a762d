//! Filter catalog builder.

use tracing::warn;

use crate::application::ListingActions;
use crate::domain::filter::{Facet, FilterCatalog, PriceRange};
use crate::domain::response::Envelope;
use crate::port::outbound::store::{AccountStore, ListingStore, SavedListingStore};

impl<L, A, S> ListingActions<L, A, S>
where
    L: ListingStore,
    A: AccountStore,
    S: SavedListingStore,
{
    /// Derive the distinct facet values and observed price bounds.
    ///
    /// The five store reads fan out concurrently. Any failure degrades
    /// into a `success: false` envelope that still carries an empty
    /// catalog with the default price range, so callers render an empty
    /// state instead of handling an error.
    pub async fn filter_catalog(&self) -> Envelope<FilterCatalog> {
        let (makes, body_types, fuel_types, transmissions, bounds) = tokio::join!(
            self.listings.distinct(Facet::Make),
            self.listings.distinct(Facet::BodyType),
            self.listings.distinct(Facet::FuelType),
            self.listings.distinct(Facet::Transmission),
            self.listings.price_bounds(),
        );

        match (makes, body_types, fuel_types, transmissions, bounds) {
            (Ok(makes), Ok(body_types), Ok(fuel_types), Ok(transmissions), Ok(bounds)) => {
                let price_range = bounds
                    .map(|(min, max)| PriceRange { min, max })
                    .unwrap_or_default();
                Envelope::ok(FilterCatalog {
                    makes,
                    body_types,
                    fuel_types,
                    transmissions,
                    price_range,
                })
            }
            _ => {
                warn!("filter catalog query failed; returning default catalog");
                Envelope::degraded(FilterCatalog::default())
            }
        }
    }
}
