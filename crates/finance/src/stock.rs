use tradebook_records::Product;

/// Products at or below their reorder threshold.
pub fn low_stock_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.stock.is_low()).collect()
}

pub fn low_stock_count(products: &[Product]) -> usize {
    products.iter().filter(|p| p.stock.is_low()).count()
}
