use crate::core::page::{escape_html, Page};
use crate::domain::model::Review;

pub const PREVIEW_ID: &str = "reviews-preview";
pub const LIST_ID: &str = "reviews-list";
pub const PREVIEW_LIMIT: usize = 3;
const STAR_COUNT: i64 = 5;

/// Five star glyphs, filled from the left for the first `rating` positions.
/// The rating is trusted as-is: out-of-range values just produce an
/// all-filled or all-outline row.
pub fn stars(rating: i64) -> String {
    (0..STAR_COUNT)
        .map(|i| {
            if i < rating {
                "<i class=\"fas fa-star\"></i>"
            } else {
                "<i class=\"far fa-star\"></i>"
            }
        })
        .collect()
}

pub fn review_item(review: &Review) -> String {
    format!(
        "<div class=\"review\">\
         <h4>{}</h4>\
         <div class=\"rating\">{}</div>\
         <p>{}</p>\
         </div>",
        escape_html(&review.name),
        stars(review.rating),
        escape_html(&review.comment)
    )
}

/// Same dual-container pattern as promotions: first three entries into the
/// preview, all entries into the full list.
pub fn populate(page: &mut Page, reviews: &[Review]) -> usize {
    let mut appended = 0;
    for (index, review) in reviews.iter().enumerate() {
        let item = review_item(review);
        if index < PREVIEW_LIMIT && page.append_html(PREVIEW_ID, &item) {
            appended += 1;
        }
        if page.append_html(LIST_ID, &item) {
            appended += 1;
        }
    }
    appended
}
