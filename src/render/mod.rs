pub mod catalog;
pub mod form;
pub mod gas_prices;
pub mod promotions;
pub mod reviews;

use crate::core::page::Page;
use crate::domain::model::SiteData;

/// Run every section renderer against one page. Each renderer only touches
/// its own containers, so pages carrying none of a section's ids are left
/// alone by it. Returns the number of fragments appended.
pub fn populate_page(page: &mut Page, data: &SiteData) -> usize {
    let mut appended = 0;
    if let Some(promotions) = &data.promotions {
        appended += promotions::populate(page, promotions);
    }
    if let Some(reviews) = &data.reviews {
        appended += reviews::populate(page, reviews);
    }
    if let Some(catalog) = &data.catalog {
        appended += catalog::populate(page, catalog);
    }
    if let Some(prices) = &data.gas_prices {
        appended += gas_prices::populate(page, prices);
    }
    appended
}
