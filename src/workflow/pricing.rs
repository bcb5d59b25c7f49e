//! The pricing step: `ValidatedOrder` to `PricedOrder`.
//!
//! Each validated line is priced as quantity times the looked-up unit price,
//! revalidated through the `Price` bounds; the line totals are then summed
//! into the billing amount, revalidated through the `BillingAmount` bounds.
//! Either bound violation surfaces as a [`PricingError`].

use crate::railway::Outcome;
use crate::simple_types::{BillingAmount, Price, ProductCode};
use crate::workflow::error_types::PricingError;
use crate::workflow::priced_types::{PricedOrder, PricedOrderLine};
use crate::workflow::validated_types::{ValidatedOrder, ValidatedOrderLine};

// =============================================================================
// to_priced_order_line
// =============================================================================

/// Attaches a line total to a validated line.
///
/// The price catalog collaborator supplies the unit price; the line total is
/// `quantity * unit price`, pushed back through the `Price` bounds. A product
/// of valid factors can still overflow the bound, which is a pricing error.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::pricing::to_priced_order_line;
/// use order_railway::workflow::ValidatedOrderLine;
/// use order_railway::simple_types::{OrderLineId, OrderQuantity, Price, ProductCode};
/// use rust_decimal::Decimal;
///
/// let product_code = ProductCode::create("ProductCode", "W1234").success().unwrap();
/// let line = ValidatedOrderLine::new(
///     OrderLineId::create("OrderLineId", "line-001").success().unwrap(),
///     product_code.clone(),
///     OrderQuantity::create("Quantity", &product_code, Decimal::from(5)).success().unwrap(),
/// );
/// let unit_price = |_: &ProductCode| Price::create(Decimal::from(100)).success().unwrap();
///
/// let priced = to_priced_order_line(&unit_price, &line).success().unwrap();
/// assert_eq!(priced.line_price().value(), Decimal::from(500));
/// ```
pub fn to_priced_order_line<GetProductPrice>(
    get_product_price: &GetProductPrice,
    validated_line: &ValidatedOrderLine,
) -> Outcome<PricedOrderLine, PricingError>
where
    GetProductPrice: Fn(&ProductCode) -> Price,
{
    let quantity = validated_line.quantity().value();
    let unit_price = get_product_price(validated_line.product_code());

    unit_price
        .multiply(quantity)
        .map_error(PricingError::from)
        .map(|line_price| {
            PricedOrderLine::new(
                validated_line.order_line_id().clone(),
                validated_line.product_code().clone(),
                *validated_line.quantity(),
                line_price,
            )
        })
}

// =============================================================================
// price_order
// =============================================================================

/// Prices a validated order.
///
/// Lines are priced left to right and sequenced: the first failing line
/// surfaces alone and no later line consults the catalog. The surviving line
/// totals are summed into the amount to bill.
pub fn price_order<GetProductPrice>(
    get_product_price: &GetProductPrice,
    validated_order: &ValidatedOrder,
) -> Outcome<PricedOrder, PricingError>
where
    GetProductPrice: Fn(&ProductCode) -> Price,
{
    Outcome::sequence(
        validated_order
            .lines()
            .iter()
            .map(|line| to_priced_order_line(get_product_price, line)),
    )
    .and_then(|priced_lines| {
        let line_prices: Vec<Price> =
            priced_lines.iter().map(PricedOrderLine::line_price).collect();

        BillingAmount::sum_prices(&line_prices)
            .map_error(PricingError::from)
            .map(|amount_to_bill| {
                PricedOrder::new(
                    validated_order.order_id().clone(),
                    validated_order.customer_info().clone(),
                    validated_order.shipping_address().clone(),
                    validated_order.billing_address().clone(),
                    amount_to_bill,
                    priced_lines,
                )
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound_types::{Address, CustomerInfo};
    use crate::simple_types::{OrderId, OrderLineId, OrderQuantity};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::cell::Cell;
    use std::str::FromStr;

    // =========================================================================
    // Fixture helpers
    // =========================================================================

    fn product_code(code: &str) -> ProductCode {
        ProductCode::create("ProductCode", code).success().unwrap()
    }

    fn price(value: i32) -> Price {
        Price::create(Decimal::from(value)).success().unwrap()
    }

    fn validated_line(line_id: &str, code: &str, quantity: i32) -> ValidatedOrderLine {
        let code = product_code(code);
        ValidatedOrderLine::new(
            OrderLineId::create("OrderLineId", line_id).success().unwrap(),
            code.clone(),
            OrderQuantity::create("Quantity", &code, Decimal::from(quantity))
                .success()
                .unwrap(),
        )
    }

    fn validated_order(lines: Vec<ValidatedOrderLine>) -> ValidatedOrder {
        let address = Address::create("Tenjin", "", "", "", "Fukuoka", "81000")
            .success()
            .unwrap();
        ValidatedOrder::new(
            OrderId::create("OrderId", "order-001").success().unwrap(),
            CustomerInfo::create("Takefusa", "Kubo", "kubo@example.com")
                .success()
                .unwrap(),
            address.clone(),
            address,
            lines,
        )
    }

    // =========================================================================
    // to_priced_order_line
    // =========================================================================

    #[rstest]
    fn test_widget_line_price() {
        let line = validated_line("line-001", "W1234", 10);
        let unit_price = |_: &ProductCode| price(50);

        let priced = to_priced_order_line(&unit_price, &line).success().unwrap();

        assert_eq!(priced.line_price().value(), Decimal::from(500));
        assert_eq!(priced.order_line_id().value(), "line-001");
    }

    #[rstest]
    fn test_gizmo_line_price_fractional_quantity() {
        let code = product_code("G123");
        let line = ValidatedOrderLine::new(
            OrderLineId::create("OrderLineId", "line-002").success().unwrap(),
            code.clone(),
            OrderQuantity::create("Quantity", &code, Decimal::from_str("5.5").unwrap())
                .success()
                .unwrap(),
        );
        let unit_price = |_: &ProductCode| price(20);

        let priced = to_priced_order_line(&unit_price, &line).success().unwrap();

        // 5.5 * 20 = 110
        assert_eq!(priced.line_price().value(), Decimal::from(110));
    }

    #[rstest]
    fn test_line_price_at_upper_bound() {
        let line = validated_line("line-001", "W1234", 10);
        let unit_price = |_: &ProductCode| price(100);

        let priced = to_priced_order_line(&unit_price, &line).success().unwrap();

        assert_eq!(priced.line_price().value(), Decimal::from(1000));
    }

    #[rstest]
    fn test_line_price_over_bound_is_pricing_error() {
        // 11 * 100 = 1100 > 1000
        let line = validated_line("line-001", "W1234", 11);
        let unit_price = |_: &ProductCode| price(100);

        let error = to_priced_order_line(&unit_price, &line).failure().unwrap();

        assert!(error.message().contains("Must not be greater than"));
    }

    // =========================================================================
    // price_order
    // =========================================================================

    #[rstest]
    fn test_single_line_order() {
        let order = validated_order(vec![validated_line("line-001", "W1234", 5)]);
        let unit_price = |_: &ProductCode| price(100);

        let priced = price_order(&unit_price, &order).success().unwrap();

        assert_eq!(priced.amount_to_bill().value(), Decimal::from(500));
        assert_eq!(priced.lines().len(), 1);
    }

    #[rstest]
    fn test_multiple_lines_sum_and_keep_order() {
        let order = validated_order(vec![
            validated_line("line-001", "W1234", 5),
            validated_line("line-002", "W5678", 3),
        ]);
        let unit_price = |_: &ProductCode| price(100);

        let priced = price_order(&unit_price, &order).success().unwrap();

        assert_eq!(priced.amount_to_bill().value(), Decimal::from(800));
        assert_eq!(priced.lines()[0].order_line_id().value(), "line-001");
        assert_eq!(priced.lines()[1].order_line_id().value(), "line-002");
    }

    #[rstest]
    fn test_empty_order_bills_zero() {
        let order = validated_order(vec![]);
        let unit_price = |_: &ProductCode| price(100);

        let priced = price_order(&unit_price, &order).success().unwrap();

        assert_eq!(priced.amount_to_bill().value(), Decimal::ZERO);
        assert!(priced.lines().is_empty());
    }

    #[rstest]
    fn test_first_failing_line_stops_catalog_lookups() {
        let order = validated_order(vec![
            validated_line("line-001", "W1234", 11), // 11 * 100 overflows the price bound
            validated_line("line-002", "W5678", 1),
        ]);
        let lookups = Cell::new(0);
        let unit_price = |_: &ProductCode| {
            lookups.set(lookups.get() + 1);
            price(100)
        };

        let outcome = price_order(&unit_price, &order);

        assert!(outcome.is_failure());
        assert_eq!(lookups.get(), 1);
    }

    #[rstest]
    fn test_billing_amount_over_bound_is_pricing_error() {
        // 11 lines at the price cap: 11 * 1000 = 11000 > 10000.
        let lines: Vec<ValidatedOrderLine> = (0..11)
            .map(|index| validated_line(&format!("line-{index:03}"), "W1234", 10))
            .collect();
        let order = validated_order(lines);
        let unit_price = |_: &ProductCode| price(100);

        let error = price_order(&unit_price, &order).failure().unwrap();

        assert!(error.message().contains("Must not be greater than"));
    }

    #[rstest]
    fn test_preserves_order_fields() {
        let order = validated_order(vec![validated_line("line-001", "W1234", 5)]);
        let unit_price = |_: &ProductCode| price(100);

        let priced = price_order(&unit_price, &order).success().unwrap();

        assert_eq!(priced.order_id(), order.order_id());
        assert_eq!(priced.customer_info(), order.customer_info());
        assert_eq!(priced.shipping_address(), order.shipping_address());
        assert_eq!(priced.billing_address(), order.billing_address());
    }
}
