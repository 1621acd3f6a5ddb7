use crate::catalog::models::Product;

/// Products whose title and category, concatenated, contain `term` case-insensitively.
/// Catalog order is preserved and an empty term keeps everything.
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| {
            format!("{}{}", product.title, product.category)
                .to_lowercase()
                .contains(&needle)
        })
        .collect()
}
