//! Sample records shown when the live product list cannot be loaded

use crate::Product;

const SAMPLE_CREATOR: &str = "68e0d3b8da61b1455ca8d813";

/// The fixed two-item list displayed in place of the live list after a failed fetch
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product {
            id: "68e0ef36c123846091c85277".to_owned(),
            name: "Motorbike".to_owned(),
            price: 98_000.0,
            created_by: SAMPLE_CREATOR.to_owned(),
        },
        Product {
            id: "68e0ef39c123846091c85279".to_owned(),
            name: "Car".to_owned(),
            price: 450_000.0,
            created_by: SAMPLE_CREATOR.to_owned(),
        },
    ]
}
