use crate::core::page::{escape_html, Page};
use crate::domain::model::Promotion;

pub const PREVIEW_ID: &str = "promotions-preview";
pub const LIST_ID: &str = "promotions-list";
pub const PREVIEW_LIMIT: usize = 3;

pub fn card(promo: &Promotion) -> String {
    format!(
        "<div class=\"card\">\
         <img src=\"{}\" alt=\"{}\" style=\"width:100%;height:150px;object-fit:cover;border-radius:4px;\">\
         <h4>{}</h4>\
         <p>{}</p>\
         </div>",
        escape_html(&promo.image),
        escape_html(&promo.title),
        escape_html(&promo.title),
        escape_html(&promo.description)
    )
}

/// Append one card per promotion: the first three into the preview
/// container, all of them into the full list. Either container may be
/// absent. Returns the number of fragments appended.
pub fn populate(page: &mut Page, promotions: &[Promotion]) -> usize {
    let mut appended = 0;
    for (index, promo) in promotions.iter().enumerate() {
        let card = card(promo);
        if index < PREVIEW_LIMIT && page.append_html(PREVIEW_ID, &card) {
            appended += 1;
        }
        if page.append_html(LIST_ID, &card) {
            appended += 1;
        }
    }
    appended
}
