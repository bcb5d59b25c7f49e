//! Unvalidated input types.
//!
//! Raw order data as it arrives from the outside: every field is a plain
//! string or decimal and nothing has been checked. These types carry no
//! validation logic of their own; the validation step converts them to
//! their constrained counterparts.

use rust_decimal::Decimal;

// =============================================================================
// UnvalidatedCustomerInfo
// =============================================================================

/// Raw customer fields before validation.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::UnvalidatedCustomerInfo;
///
/// let customer = UnvalidatedCustomerInfo::new(
///     "Takefusa".to_string(),
///     "Kubo".to_string(),
///     "kubo@example.com".to_string(),
/// );
/// assert_eq!(customer.first_name(), "Takefusa");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedCustomerInfo {
    first_name: String,
    last_name: String,
    email_address: String,
}

impl UnvalidatedCustomerInfo {
    /// Wraps raw customer fields; nothing is checked here.
    #[must_use]
    pub const fn new(first_name: String, last_name: String, email_address: String) -> Self {
        Self {
            first_name,
            last_name,
            email_address,
        }
    }

    /// Returns the raw first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the raw last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the raw email address.
    #[must_use]
    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

// =============================================================================
// UnvalidatedAddress
// =============================================================================

/// Raw address fields before validation.
///
/// The optional lines may be empty strings; emptiness is interpreted by the
/// validation step, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedAddress {
    address_line1: String,
    address_line2: String,
    address_line3: String,
    address_line4: String,
    city: String,
    zip_code: String,
}

impl UnvalidatedAddress {
    /// Wraps raw address fields; nothing is checked here.
    #[must_use]
    pub const fn new(
        address_line1: String,
        address_line2: String,
        address_line3: String,
        address_line4: String,
        city: String,
        zip_code: String,
    ) -> Self {
        Self {
            address_line1,
            address_line2,
            address_line3,
            address_line4,
            city,
            zip_code,
        }
    }

    /// Returns the raw first address line.
    #[must_use]
    pub fn address_line1(&self) -> &str {
        &self.address_line1
    }

    /// Returns the raw second address line, possibly empty.
    #[must_use]
    pub fn address_line2(&self) -> &str {
        &self.address_line2
    }

    /// Returns the raw third address line, possibly empty.
    #[must_use]
    pub fn address_line3(&self) -> &str {
        &self.address_line3
    }

    /// Returns the raw fourth address line, possibly empty.
    #[must_use]
    pub fn address_line4(&self) -> &str {
        &self.address_line4
    }

    /// Returns the raw city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the raw zip code.
    #[must_use]
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

// =============================================================================
// UnvalidatedOrderLine
// =============================================================================

/// A raw order line before validation.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::UnvalidatedOrderLine;
/// use rust_decimal::Decimal;
///
/// let line = UnvalidatedOrderLine::new(
///     "line-001".to_string(),
///     "W1234".to_string(),
///     Decimal::from(10),
/// );
/// assert_eq!(line.product_code(), "W1234");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrderLine {
    order_line_id: String,
    product_code: String,
    quantity: Decimal,
}

impl UnvalidatedOrderLine {
    /// Wraps raw line fields; nothing is checked here.
    #[must_use]
    pub const fn new(order_line_id: String, product_code: String, quantity: Decimal) -> Self {
        Self {
            order_line_id,
            product_code,
            quantity,
        }
    }

    /// Returns the raw line id.
    #[must_use]
    pub fn order_line_id(&self) -> &str {
        &self.order_line_id
    }

    /// Returns the raw product code.
    #[must_use]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }
}

// =============================================================================
// UnvalidatedOrder
// =============================================================================

/// A raw order as received from the outside, the input of the place-order
/// workflow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnvalidatedOrder {
    order_id: String,
    customer_info: UnvalidatedCustomerInfo,
    shipping_address: UnvalidatedAddress,
    billing_address: UnvalidatedAddress,
    lines: Vec<UnvalidatedOrderLine>,
}

impl UnvalidatedOrder {
    /// Wraps a raw order; nothing is checked here.
    #[must_use]
    pub const fn new(
        order_id: String,
        customer_info: UnvalidatedCustomerInfo,
        shipping_address: UnvalidatedAddress,
        billing_address: UnvalidatedAddress,
        lines: Vec<UnvalidatedOrderLine>,
    ) -> Self {
        Self {
            order_id,
            customer_info,
            shipping_address,
            billing_address,
            lines,
        }
    }

    /// Returns the raw order id.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Returns the raw customer info.
    #[must_use]
    pub const fn customer_info(&self) -> &UnvalidatedCustomerInfo {
        &self.customer_info
    }

    /// Returns the raw shipping address.
    #[must_use]
    pub const fn shipping_address(&self) -> &UnvalidatedAddress {
        &self.shipping_address
    }

    /// Returns the raw billing address.
    #[must_use]
    pub const fn billing_address(&self) -> &UnvalidatedAddress {
        &self.billing_address
    }

    /// Returns the raw order lines.
    #[must_use]
    pub fn lines(&self) -> &[UnvalidatedOrderLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn test_customer_info_getters() {
        let customer = UnvalidatedCustomerInfo::new(
            "Takefusa".to_string(),
            "Kubo".to_string(),
            "kubo@example.com".to_string(),
        );

        assert_eq!(customer.first_name(), "Takefusa");
        assert_eq!(customer.last_name(), "Kubo");
        assert_eq!(customer.email_address(), "kubo@example.com");
    }

    #[rstest]
    fn test_address_getters() {
        let address = UnvalidatedAddress::new(
            "Tenjin".to_string(),
            "Apt 4".to_string(),
            String::new(),
            String::new(),
            "Fukuoka".to_string(),
            "81000".to_string(),
        );

        assert_eq!(address.address_line1(), "Tenjin");
        assert_eq!(address.address_line2(), "Apt 4");
        assert_eq!(address.address_line3(), "");
        assert_eq!(address.city(), "Fukuoka");
        assert_eq!(address.zip_code(), "81000");
    }

    #[rstest]
    fn test_order_getters() {
        let customer = UnvalidatedCustomerInfo::new(
            "Takefusa".to_string(),
            "Kubo".to_string(),
            "kubo@example.com".to_string(),
        );
        let address = UnvalidatedAddress::new(
            "Tenjin".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Fukuoka".to_string(),
            "81000".to_string(),
        );
        let lines = vec![
            UnvalidatedOrderLine::new("line-001".to_string(), "W1234".to_string(), Decimal::from(10)),
            UnvalidatedOrderLine::new(
                "line-002".to_string(),
                "G123".to_string(),
                Decimal::from_str("2.50").unwrap(),
            ),
        ];

        let order = UnvalidatedOrder::new(
            "order-001".to_string(),
            customer.clone(),
            address.clone(),
            address.clone(),
            lines,
        );

        assert_eq!(order.order_id(), "order-001");
        assert_eq!(order.customer_info(), &customer);
        assert_eq!(order.shipping_address(), &address);
        assert_eq!(order.lines().len(), 2);
    }
}
