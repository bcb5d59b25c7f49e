//! Priced order types, the output of the pricing step.

use crate::compound_types::{Address, CustomerInfo};
use crate::simple_types::{BillingAmount, OrderId, OrderLineId, OrderQuantity, Price, ProductCode};

// =============================================================================
// PricedOrderLine
// =============================================================================

/// A validated order line with its computed line price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrderLine {
    order_line_id: OrderLineId,
    product_code: ProductCode,
    quantity: OrderQuantity,
    line_price: Price,
}

impl PricedOrderLine {
    /// Assembles a priced line from its parts.
    #[must_use]
    pub const fn new(
        order_line_id: OrderLineId,
        product_code: ProductCode,
        quantity: OrderQuantity,
        line_price: Price,
    ) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
            line_price,
        }
    }

    /// Returns the line id.
    #[must_use]
    pub const fn order_line_id(&self) -> &OrderLineId {
        &self.order_line_id
    }

    /// Returns the product code.
    #[must_use]
    pub const fn product_code(&self) -> &ProductCode {
        &self.product_code
    }

    /// Returns the quantity.
    #[must_use]
    pub const fn quantity(&self) -> &OrderQuantity {
        &self.quantity
    }

    /// Returns the line total.
    #[must_use]
    pub const fn line_price(&self) -> Price {
        self.line_price
    }
}

// =============================================================================
// PricedOrder
// =============================================================================

/// A fully priced order: every line carries its price and the order carries
/// the amount to bill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricedOrder {
    order_id: OrderId,
    customer_info: CustomerInfo,
    shipping_address: Address,
    billing_address: Address,
    amount_to_bill: BillingAmount,
    lines: Vec<PricedOrderLine>,
}

impl PricedOrder {
    /// Assembles a priced order from its parts.
    #[must_use]
    pub const fn new(
        order_id: OrderId,
        customer_info: CustomerInfo,
        shipping_address: Address,
        billing_address: Address,
        amount_to_bill: BillingAmount,
        lines: Vec<PricedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            amount_to_bill,
            lines,
        }
    }

    /// Returns the order id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Returns the customer info.
    #[must_use]
    pub const fn customer_info(&self) -> &CustomerInfo {
        &self.customer_info
    }

    /// Returns the shipping address.
    #[must_use]
    pub const fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    /// Returns the billing address.
    #[must_use]
    pub const fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    /// Returns the amount to bill.
    #[must_use]
    pub const fn amount_to_bill(&self) -> BillingAmount {
        self.amount_to_bill
    }

    /// Returns the priced lines.
    #[must_use]
    pub fn lines(&self) -> &[PricedOrderLine] {
        &self.lines
    }
}
