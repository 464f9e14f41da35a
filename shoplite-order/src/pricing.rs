use shoplite_catalog::Product;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::OrderLine;

/// A (product, quantity) pair as requested by the customer.
#[derive(Debug, Clone)]
pub struct RequestedLine {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// The priced result of a checkout request.
#[derive(Debug)]
pub struct PricedOrder {
    pub lines: Vec<OrderLine>,
    pub grand_total: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("unknown product id: {0}")]
    UnknownProduct(Uuid),

    #[error("invalid quantity {quantity} for product {product_id}")]
    InvalidQuantity { product_id: Uuid, quantity: i32 },
}

/// Price the requested lines against a catalog snapshot.
///
/// Every requested id must resolve in the snapshot — a miss is an
/// `UnknownProduct` error, never a silent drop. Unit prices are
/// snapshotted into the lines, line totals are `price * quantity` in i64
/// minor units, and output lines keep the request order. Deterministic for
/// a given snapshot and request.
pub fn price_order(
    order_id: Uuid,
    requested: &[RequestedLine],
    catalog: &HashMap<Uuid, Product>,
) -> Result<PricedOrder, PricingError> {
    let mut lines = Vec::with_capacity(requested.len());
    let mut grand_total: i64 = 0;

    for req in requested {
        if req.quantity <= 0 {
            return Err(PricingError::InvalidQuantity {
                product_id: req.product_id,
                quantity: req.quantity,
            });
        }

        let product = catalog
            .get(&req.product_id)
            .ok_or(PricingError::UnknownProduct(req.product_id))?;

        let line = OrderLine::new(order_id, product.id, req.quantity, product.price);
        grand_total += line.total;
        lines.push(line);
    }

    Ok(PricedOrder { lines, grand_total })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_of(products: &[(Uuid, i64)]) -> HashMap<Uuid, Product> {
        products
            .iter()
            .map(|(id, price)| {
                (
                    *id,
                    Product {
                        id: *id,
                        name: format!("product-{price}"),
                        price: *price,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn grand_total_is_sum_of_line_totals() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let catalog = catalog_of(&[(p1, 1000), (p2, 2500)]);
        let requested = vec![
            RequestedLine { product_id: p1, quantity: 2 },
            RequestedLine { product_id: p2, quantity: 1 },
        ];

        let priced = price_order(Uuid::new_v4(), &requested, &catalog).unwrap();

        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.lines[0].total, 2000);
        assert_eq!(priced.lines[1].total, 2500);
        assert_eq!(priced.grand_total, 4500);
    }

    #[test]
    fn lines_keep_request_order_not_catalog_order() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let catalog = catalog_of(&[(p1, 100), (p2, 200)]);
        let requested = vec![
            RequestedLine { product_id: p2, quantity: 1 },
            RequestedLine { product_id: p1, quantity: 1 },
        ];

        let priced = price_order(Uuid::new_v4(), &requested, &catalog).unwrap();

        assert_eq!(priced.lines[0].product_id, p2);
        assert_eq!(priced.lines[1].product_id, p1);
    }

    #[test]
    fn unknown_product_is_an_error() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_of(&[(p1, 100)]);
        let unknown = Uuid::new_v4();
        let requested = vec![RequestedLine { product_id: unknown, quantity: 1 }];

        let err = price_order(Uuid::new_v4(), &requested, &catalog).unwrap_err();
        assert!(matches!(err, PricingError::UnknownProduct(id) if id == unknown));
    }

    #[test]
    fn non_positive_quantity_is_an_error() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_of(&[(p1, 100)]);

        for quantity in [0, -1] {
            let requested = vec![RequestedLine { product_id: p1, quantity }];
            let err = price_order(Uuid::new_v4(), &requested, &catalog).unwrap_err();
            assert!(matches!(err, PricingError::InvalidQuantity { .. }));
        }
    }

    #[test]
    fn empty_request_prices_to_zero() {
        let priced = price_order(Uuid::new_v4(), &[], &HashMap::new()).unwrap();
        assert!(priced.lines.is_empty());
        assert_eq!(priced.grand_total, 0);
    }

    #[test]
    fn duplicate_product_ids_produce_separate_lines() {
        let p1 = Uuid::new_v4();
        let catalog = catalog_of(&[(p1, 300)]);
        let requested = vec![
            RequestedLine { product_id: p1, quantity: 1 },
            RequestedLine { product_id: p1, quantity: 2 },
        ];

        let priced = price_order(Uuid::new_v4(), &requested, &catalog).unwrap();

        assert_eq!(priced.lines.len(), 2);
        assert_eq!(priced.grand_total, 900);
    }
}
