use restock_inventory::StockItem;

use crate::matching::SupplierMatch;

/// Subject line of every quote request.
pub const QUOTE_REQUEST_SUBJECT: &str = "Restocking quote request";

const INTRO: &str =
    "We are contacting you to request a restocking quote for the following items:";
const OUTRO: &str = "Please send us your quote at your earliest convenience.";
const SIGNATURE: &str = "Kind regards,\nThe Pharmacy";

/// A rendered, ready-to-send message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub subject: String,
    pub body: String,
}

/// `<name> (stock: <current>, threshold: <reorder_level>)`
pub fn format_item_line(item: &StockItem) -> String {
    format!(
        "{} (stock: {}, threshold: {})",
        item.name(),
        item.quantity(),
        item.reorder_level()
    )
}

/// Render the quote request for one matched supplier.
///
/// Pure: same match in, same bytes out. Sections come in the match's order,
/// items in pending order.
pub fn compose(matched: &SupplierMatch<'_>) -> QuoteRequest {
    let mut body = format!("Hello {},\n\n{INTRO}\n\n", matched.supplier().name());

    for section in matched.sections() {
        body.push_str(&format!("=== {} ===\n", section.category.label()));
        for item in section.items {
            body.push_str(&format!("  - {}\n", format_item_line(item)));
        }
        body.push('\n');
    }

    body.push_str(OUTRO);
    body.push_str("\n\n");
    body.push_str(SIGNATURE);

    QuoteRequest {
        subject: QUOTE_REQUEST_SUBJECT.to_string(),
        body,
    }
}
