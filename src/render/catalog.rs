use crate::core::page::{escape_html, Page};
use crate::domain::model::{CatalogCategory, CatalogItem};

pub const CONTAINER_ID: &str = "catalog";

/// Dollar amount with exactly two decimal digits.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn item_card(item: &CatalogItem) -> String {
    format!(
        "<div class=\"catalog-item\">\
         <img src=\"{}\" alt=\"{}\">\
         <div class=\"item-info\">\
         <h4>{}</h4>\
         <p>{}</p>\
         <span class=\"price\">{}</span>\
         </div>\
         </div>",
        escape_html(&item.image),
        escape_html(&item.name),
        escape_html(&item.name),
        escape_html(&item.description),
        format_price(item.price)
    )
}

fn category_section(category: &CatalogCategory) -> String {
    let mut section = format!(
        "<div class=\"catalog-category\"><h3>{}</h3><div class=\"catalog-items\">",
        escape_html(&category.category)
    );
    for item in &category.items {
        section.push_str(&item_card(item));
    }
    section.push_str("</div></div>");
    section
}

/// One section per category, appended in input order. No sorting or
/// filtering; a missing container is a no-op.
pub fn populate(page: &mut Page, categories: &[CatalogCategory]) -> usize {
    let mut appended = 0;
    for category in categories {
        if page.append_html(CONTAINER_ID, &category_section(category)) {
            appended += 1;
        }
    }
    appended
}
