use crate::catalog::Product;

/// Descriptions are cut to this many characters, ignoring word boundaries
pub const DESCRIPTION_PREVIEW_CHARS: usize = 80;

/// Stock strictly below this shows a warning
pub const LOW_STOCK_THRESHOLD: u32 = 50;

/// First 80 characters followed by an ellipsis
pub fn truncate_description(description: &str) -> String {
    let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", preview)
}

/// Dollar-prefixed price in its shortest form (399 -> "$399", 19.99 -> "$19.99")
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Rating to one decimal place, ties rounded away from zero
pub fn format_rating(rating: f64) -> String {
    // Only x.25 and x.75 land exactly halfway between tenths; `{:.1}` would round those to even
    let quarters = rating * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (rating * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", rating)
    }
}

pub fn low_stock_warning(stock: u32) -> Option<String> {
    if stock < LOW_STOCK_THRESHOLD {
        Some(format!("Only {} left!", stock))
    } else {
        None
    }
}

/// Display strings for one product card
#[derive(Debug, Clone, PartialEq)]
pub struct CardDisplay {
    pub title: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub rating: String,
    pub stock_warning: Option<String>,
}

impl From<&Product> for CardDisplay {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            category: product.category.clone(),
            description: truncate_description(&product.description),
            price: format_price(product.price),
            rating: format_rating(product.rating),
            stock_warning: low_stock_warning(product.stock),
        }
    }
}
