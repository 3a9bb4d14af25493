use crate::core::page::Page;
use crate::domain::model::GasPrices;

pub const TABLE_ID: &str = "gas-table";
pub const UPDATED_ID: &str = "gas-updated";

/// `mid_grade` -> "Mid Grade": underscores become spaces, each word gets a
/// capital first letter.
pub fn display_label(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rows always render in the fixed order regular, mid_grade, premium,
/// regardless of JSON key order. The whole section is a no-op without the
/// table body, last-updated text included. The text is used verbatim.
pub fn populate(page: &mut Page, prices: &GasPrices) -> usize {
    let grades = [
        ("regular", prices.regular),
        ("mid_grade", prices.mid_grade),
        ("premium", prices.premium),
    ];

    let mut appended = 0;
    for (key, price) in grades {
        let row = format!(
            "<tr><td>{}</td><td>${:.2}</td></tr>",
            display_label(key),
            price
        );
        if page.append_into_table_body(TABLE_ID, &row) {
            appended += 1;
        }
    }

    // No table body means no rows landed; leave gas-updated alone too.
    if appended == 0 {
        return 0;
    }

    if page.set_text(
        UPDATED_ID,
        &format!("Last updated: {}", prices.last_updated),
    ) {
        appended += 1;
    }
    appended
}
