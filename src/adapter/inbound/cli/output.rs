//! Terminal rendering for action envelopes.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::filter::FilterCatalog;
use crate::domain::listing::ListingCard;
use crate::domain::response::PageInfo;
use crate::error::Result;

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Tabled)]
struct ListingLine {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Make")]
    make: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Saved")]
    saved: String,
}

impl From<&ListingCard> for ListingLine {
    fn from(card: &ListingCard) -> Self {
        Self {
            id: short_id(&card.id),
            make: card.make.clone(),
            model: card.model.clone(),
            year: card.year,
            price: format!("${:.2}", card.price),
            status: card.status.clone(),
            saved: if card.saved { "*".into() } else { String::new() },
        }
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Render listings as a table, with pagination footer when present.
pub fn print_listings(cards: &[ListingCard], pagination: Option<&PageInfo>) {
    if cards.is_empty() {
        println!("No listings found.");
    } else {
        let lines: Vec<ListingLine> = cards.iter().map(ListingLine::from).collect();
        let mut table = Table::new(lines);
        table.with(Style::rounded());
        println!("{table}");
    }
    if let Some(page) = pagination {
        println!(
            "Page {} of {} ({} total)",
            page.current_page, page.pages, page.total
        );
    }
}

/// Render one listing as key/value lines.
pub fn print_listing(card: &ListingCard) {
    println!("{} {} {}", card.year, card.make, card.model);
    println!("  id:           {}", card.id);
    println!("  body type:    {}", card.body_type);
    println!("  fuel type:    {}", card.fuel_type);
    println!("  transmission: {}", card.transmission);
    println!("  color:        {}", card.color);
    println!("  mileage:      {}", card.mileage);
    println!("  price:        ${:.2}", card.price);
    println!("  status:       {}", card.status);
    println!("  listed at:    {}", card.created_at);
    println!("  saved:        {}", if card.saved { "yes" } else { "no" });
    if !card.description.is_empty() {
        println!("  {}", card.description);
    }
}

/// Render the facet catalog.
pub fn print_catalog(catalog: &FilterCatalog) {
    println!("Makes:         {}", join_or_dash(&catalog.makes));
    println!("Body types:    {}", join_or_dash(&catalog.body_types));
    println!("Fuel types:    {}", join_or_dash(&catalog.fuel_types));
    println!("Transmissions: {}", join_or_dash(&catalog.transmissions));
    println!(
        "Price range:   ${:.0} - ${:.0}",
        catalog.price_range.min, catalog.price_range.max
    );
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}
