//! The validation step: `UnvalidatedOrder` to `ValidatedOrder`.
//!
//! Each raw field is converted through its constrained type and the partial
//! results are assembled with the railway combinators. Sub-validations run in
//! a fixed order: order id, customer info, shipping address, billing address,
//! then the lines left to right. The first failure switches the chain onto
//! the failure track and nothing after it is evaluated, including the
//! collaborator calls.
//!
//! Two collaborators are injected as plain functions: a synchronous product
//! catalog lookup and an asynchronous address verification service returning
//! a suspension.

use std::sync::Arc;

use crate::compound_types::{Address, CustomerInfo};
use crate::railway::{AsyncOutcome, Outcome};
use crate::simple_types::{
    OrderId, OrderLineId, OrderQuantity, ProductCode, ValidationError,
};
use crate::workflow::unvalidated_types::{
    UnvalidatedAddress, UnvalidatedCustomerInfo, UnvalidatedOrder, UnvalidatedOrderLine,
};
use crate::workflow::validated_types::{
    AddressValidationError, CheckedAddress, ValidatedOrder, ValidatedOrderLine,
};

// =============================================================================
// to_order_id
// =============================================================================

/// Validates a raw order id string.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::validation::to_order_id;
///
/// let order_id = to_order_id("order-001").success().unwrap();
/// assert_eq!(order_id.value(), "order-001");
///
/// let error = to_order_id("").failure().unwrap();
/// assert_eq!(error.field_name, "OrderId");
/// ```
#[inline]
pub fn to_order_id(order_id: &str) -> Outcome<OrderId, ValidationError> {
    OrderId::create("OrderId", order_id)
}

// =============================================================================
// to_order_line_id
// =============================================================================

/// Validates a raw order line id string.
#[inline]
pub fn to_order_line_id(order_line_id: &str) -> Outcome<OrderLineId, ValidationError> {
    OrderLineId::create("OrderLineId", order_line_id)
}

// =============================================================================
// to_customer_info
// =============================================================================

/// Validates raw customer fields into a `CustomerInfo`.
///
/// Name before email; the first failing field surfaces alone.
#[inline]
pub fn to_customer_info(
    unvalidated: &UnvalidatedCustomerInfo,
) -> Outcome<CustomerInfo, ValidationError> {
    CustomerInfo::create(
        unvalidated.first_name(),
        unvalidated.last_name(),
        unvalidated.email_address(),
    )
}

// =============================================================================
// to_address
// =============================================================================

/// Converts a service-checked address into a constrained `Address`.
///
/// The service only vouches for the address existing; every field still goes
/// through its own constrained type here.
pub fn to_address(checked_address: &CheckedAddress) -> Outcome<Address, ValidationError> {
    let unvalidated = checked_address.value();
    Address::create(
        unvalidated.address_line1(),
        unvalidated.address_line2(),
        unvalidated.address_line3(),
        unvalidated.address_line4(),
        unvalidated.city(),
        unvalidated.zip_code(),
    )
}

// =============================================================================
// to_checked_address
// =============================================================================

/// Sends a raw address to the verification collaborator.
///
/// The collaborator's rejection reasons are re-worded into field-level
/// validation errors: `NotFound` becomes `Address not found` and
/// `InvalidFormat` becomes `Address has bad format`. The returned suspension
/// performs no work until awaited.
pub fn to_checked_address<CheckAddress>(
    check_address_exists: &CheckAddress,
    address: UnvalidatedAddress,
) -> AsyncOutcome<CheckedAddress, ValidationError>
where
    CheckAddress: Fn(UnvalidatedAddress) -> AsyncOutcome<CheckedAddress, AddressValidationError>,
{
    check_address_exists(address).map_error(|error| match error {
        AddressValidationError::NotFound => ValidationError::new("Address", "Address not found"),
        AddressValidationError::InvalidFormat => {
            ValidationError::new("Address", "Address has bad format")
        }
    })
}

// =============================================================================
// to_product_code
// =============================================================================

/// Validates a raw product code string and checks it exists in the catalog.
///
/// The format is parsed first; only a well-formed code reaches the catalog
/// lookup. A missing product fails with `Invalid: <code>`.
///
/// # Examples
///
/// ```rust
/// use order_railway::workflow::validation::to_product_code;
/// use order_railway::simple_types::ProductCode;
///
/// let in_catalog = |_: &ProductCode| true;
/// let code = to_product_code(&in_catalog, "W1234").success().unwrap();
/// assert_eq!(code.value(), "W1234");
///
/// let missing = |_: &ProductCode| false;
/// let error = to_product_code(&missing, "W9999").failure().unwrap();
/// assert_eq!(error.message, "Invalid: W9999");
/// ```
pub fn to_product_code<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    product_code: &str,
) -> Outcome<ProductCode, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool,
{
    ProductCode::create("ProductCode", product_code).and_then(|product_code| {
        if check_product_code_exists(&product_code) {
            Outcome::Success(product_code)
        } else {
            Outcome::Failure(ValidationError::new(
                "ProductCode",
                &format!("Invalid: {}", product_code.value()),
            ))
        }
    })
}

// =============================================================================
// to_order_quantity
// =============================================================================

/// Validates a raw quantity against the representation its product demands.
///
/// The product code must already be validated; it selects between unit and
/// kilogram quantities.
#[inline]
pub fn to_order_quantity(
    product_code: &ProductCode,
    quantity: rust_decimal::Decimal,
) -> Outcome<OrderQuantity, ValidationError> {
    OrderQuantity::create("Quantity", product_code, quantity)
}

// =============================================================================
// to_validated_order_line
// =============================================================================

/// Validates a single raw order line.
///
/// Line id, then product code (including the catalog check), then quantity.
/// The quantity validation receives the already-validated product code.
pub fn to_validated_order_line<CheckProduct>(
    check_product_code_exists: &CheckProduct,
    unvalidated: &UnvalidatedOrderLine,
) -> Outcome<ValidatedOrderLine, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool,
{
    to_order_line_id(unvalidated.order_line_id()).and_then(|order_line_id| {
        to_product_code(check_product_code_exists, unvalidated.product_code()).and_then(
            |product_code| {
                to_order_quantity(&product_code, unvalidated.quantity()).map(|quantity| {
                    ValidatedOrderLine::new(order_line_id, product_code, quantity)
                })
            },
        )
    })
}

// =============================================================================
// validate_order
// =============================================================================

/// Validates a raw order into a `ValidatedOrder`, as a suspension.
///
/// Sub-validations run in a fixed order when the suspension is awaited:
/// order id, customer info, shipping address, billing address, lines. The
/// shipping-address verification completes before the billing-address
/// verification begins; the two calls are never concurrent. After the first
/// failure no later sub-validation is evaluated and no later collaborator is
/// invoked.
///
/// # Type Parameters
///
/// * `CheckProduct` - Catalog lookup, `Fn(&ProductCode) -> bool`
/// * `CheckAddress` - Address verification returning a suspension
pub fn validate_order<CheckProduct, CheckAddress>(
    check_product_code_exists: CheckProduct,
    check_address_exists: CheckAddress,
    unvalidated_order: &UnvalidatedOrder,
) -> AsyncOutcome<ValidatedOrder, ValidationError>
where
    CheckProduct: Fn(&ProductCode) -> bool + Send + 'static,
    CheckAddress: Fn(UnvalidatedAddress) -> AsyncOutcome<CheckedAddress, AddressValidationError>
        + Send
        + Sync
        + 'static,
{
    // The verification collaborator is consulted once per address; both
    // continuations need their own handle to it.
    let check_shipping = Arc::new(check_address_exists);
    let check_billing = Arc::clone(&check_shipping);

    let shipping_raw = unvalidated_order.shipping_address().clone();
    let billing_raw = unvalidated_order.billing_address().clone();
    let lines_raw = unvalidated_order.lines().to_vec();

    to_order_id(unvalidated_order.order_id())
        .and_then2(
            |_| to_customer_info(unvalidated_order.customer_info()),
            |order_id, customer_info| (order_id, customer_info),
        )
        .into_async()
        .and_then(move |(order_id, customer_info)| {
            to_checked_address(check_shipping.as_ref(), shipping_raw)
                .and_then(|checked| to_address(&checked).into_async())
                .map(move |shipping_address| (order_id, customer_info, shipping_address))
        })
        .and_then(move |(order_id, customer_info, shipping_address)| {
            to_checked_address(check_billing.as_ref(), billing_raw)
                .and_then(|checked| to_address(&checked).into_async())
                .map(move |billing_address| {
                    (order_id, customer_info, shipping_address, billing_address)
                })
        })
        .and_then(move |(order_id, customer_info, shipping_address, billing_address)| {
            // A lazy iterator keeps later lines unevaluated past the first
            // failing one.
            Outcome::sequence(
                lines_raw
                    .iter()
                    .map(|line| to_validated_order_line(&check_product_code_exists, line)),
            )
            .map(|lines| {
                ValidatedOrder::new(
                    order_id,
                    customer_info,
                    shipping_address,
                    billing_address,
                    lines,
                )
            })
            .into_async()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // =========================================================================
    // Collaborator stubs
    // =========================================================================

    fn product_in_catalog() -> impl Fn(&ProductCode) -> bool + Send + 'static {
        |_: &ProductCode| true
    }

    fn product_missing() -> impl Fn(&ProductCode) -> bool + Send + 'static {
        |_: &ProductCode| false
    }

    fn address_service_approves()
    -> impl Fn(UnvalidatedAddress) -> AsyncOutcome<CheckedAddress, AddressValidationError>
    + Send
    + Sync
    + 'static {
        |address: UnvalidatedAddress| AsyncOutcome::succeed(CheckedAddress::new(address))
    }

    fn address_service_rejects(
        error: AddressValidationError,
    ) -> impl Fn(UnvalidatedAddress) -> AsyncOutcome<CheckedAddress, AddressValidationError>
    + Send
    + Sync
    + 'static {
        move |_: UnvalidatedAddress| AsyncOutcome::fail(error)
    }

    // =========================================================================
    // Fixture data
    // =========================================================================

    fn valid_customer() -> UnvalidatedCustomerInfo {
        UnvalidatedCustomerInfo::new(
            "Takefusa".to_string(),
            "Kubo".to_string(),
            "kubo@example.com".to_string(),
        )
    }

    fn valid_address() -> UnvalidatedAddress {
        UnvalidatedAddress::new(
            "Tenjin".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Fukuoka".to_string(),
            "81000".to_string(),
        )
    }

    fn valid_line() -> UnvalidatedOrderLine {
        UnvalidatedOrderLine::new("line-001".to_string(), "W1234".to_string(), Decimal::from(10))
    }

    fn valid_order() -> UnvalidatedOrder {
        UnvalidatedOrder::new(
            "order-001".to_string(),
            valid_customer(),
            valid_address(),
            valid_address(),
            vec![valid_line()],
        )
    }

    // =========================================================================
    // Field conversions
    // =========================================================================

    #[rstest]
    fn test_to_order_id_valid() {
        let result = to_order_id("order-001");

        assert_eq!(result.success().unwrap().value(), "order-001");
    }

    #[rstest]
    #[case("", "Must not be empty")]
    fn test_to_order_id_invalid(#[case] input: &str, #[case] expected_message: &str) {
        let error = to_order_id(input).failure().unwrap();

        assert_eq!(error.field_name, "OrderId");
        assert_eq!(error.message, expected_message);
    }

    #[rstest]
    fn test_to_order_id_too_long() {
        let error = to_order_id(&"a".repeat(51)).failure().unwrap();

        assert_eq!(error.message, "Must not be more than 50 chars");
    }

    #[rstest]
    fn test_to_order_line_id_valid() {
        let result = to_order_line_id("line-001");

        assert_eq!(result.success().unwrap().value(), "line-001");
    }

    #[rstest]
    fn test_to_customer_info_valid() {
        let customer = to_customer_info(&valid_customer()).success().unwrap();

        assert_eq!(customer.name().first_name().value(), "Takefusa");
        assert_eq!(customer.email_address().value(), "kubo@example.com");
    }

    #[rstest]
    fn test_to_customer_info_invalid_first_name() {
        let unvalidated = UnvalidatedCustomerInfo::new(
            String::new(),
            "Kubo".to_string(),
            "kubo@example.com".to_string(),
        );

        let error = to_customer_info(&unvalidated).failure().unwrap();

        assert_eq!(error.field_name, "FirstName");
        assert_eq!(error.message, "Must not be empty");
    }

    #[rstest]
    fn test_to_address_valid() {
        let checked = CheckedAddress::new(valid_address());

        let address = to_address(&checked).success().unwrap();

        assert_eq!(address.address_line1().value(), "Tenjin");
        assert_eq!(address.city().value(), "Fukuoka");
        assert!(address.address_line2().is_absent());
    }

    #[rstest]
    fn test_to_address_bad_zip() {
        let raw = UnvalidatedAddress::new(
            "Tenjin".to_string(),
            String::new(),
            String::new(),
            String::new(),
            "Fukuoka".to_string(),
            "810".to_string(),
        );

        let error = to_address(&CheckedAddress::new(raw)).failure().unwrap();

        assert_eq!(error.field_name, "ZipCode");
    }

    #[rstest]
    #[case(AddressValidationError::NotFound, "Address not found")]
    #[case(AddressValidationError::InvalidFormat, "Address has bad format")]
    fn test_to_checked_address_maps_service_errors(
        #[case] service_error: AddressValidationError,
        #[case] expected_message: &str,
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let check_address = address_service_rejects(service_error);

        let outcome =
            runtime.block_on(to_checked_address(&check_address, valid_address()).run());

        let error = outcome.failure().unwrap();
        assert_eq!(error.field_name, "Address");
        assert_eq!(error.message, expected_message);
    }

    #[rstest]
    fn test_to_checked_address_passes_approved_address_through() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let check_address = address_service_approves();

        let outcome =
            runtime.block_on(to_checked_address(&check_address, valid_address()).run());

        assert_eq!(outcome.success().unwrap().value(), &valid_address());
    }

    // =========================================================================
    // Product code and quantity
    // =========================================================================

    #[rstest]
    fn test_to_product_code_widget_in_catalog() {
        let result = to_product_code(&product_in_catalog(), "W1234");

        assert!(matches!(result.success().unwrap(), ProductCode::Widget(_)));
    }

    #[rstest]
    fn test_to_product_code_gizmo_in_catalog() {
        let result = to_product_code(&product_in_catalog(), "G123");

        assert!(matches!(result.success().unwrap(), ProductCode::Gizmo(_)));
    }

    #[rstest]
    fn test_to_product_code_bad_format_skips_catalog() {
        let lookups = AtomicUsize::new(0);
        let check = |_: &ProductCode| {
            lookups.fetch_add(1, Ordering::SeqCst);
            true
        };

        let error = to_product_code(&check, "X9999").failure().unwrap();

        assert_eq!(error.message, "Format not recognized 'X9999'");
        assert_eq!(lookups.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_to_product_code_missing_from_catalog() {
        let error = to_product_code(&product_missing(), "W9999").failure().unwrap();

        assert_eq!(error.field_name, "ProductCode");
        assert_eq!(error.message, "Invalid: W9999");
    }

    #[rstest]
    fn test_to_order_quantity_widget() {
        let code = ProductCode::create("ProductCode", "W1234").success().unwrap();

        let quantity = to_order_quantity(&code, Decimal::from(10)).success().unwrap();

        assert!(matches!(quantity, OrderQuantity::Unit(_)));
    }

    #[rstest]
    fn test_to_order_quantity_gizmo() {
        let code = ProductCode::create("ProductCode", "G123").success().unwrap();

        let quantity = to_order_quantity(&code, Decimal::from_str("2.50").unwrap())
            .success()
            .unwrap();

        assert!(matches!(quantity, OrderQuantity::Kilogram(_)));
    }

    #[rstest]
    fn test_to_order_quantity_widget_rejects_fractions() {
        let code = ProductCode::create("ProductCode", "W1234").success().unwrap();

        let error = to_order_quantity(&code, Decimal::from_str("1.5").unwrap())
            .failure()
            .unwrap();

        assert_eq!(error.field_name, "Quantity");
    }

    // =========================================================================
    // Line validation
    // =========================================================================

    #[rstest]
    fn test_to_validated_order_line_valid() {
        let validated = to_validated_order_line(&product_in_catalog(), &valid_line())
            .success()
            .unwrap();

        assert_eq!(validated.order_line_id().value(), "line-001");
        assert!(matches!(validated.quantity(), OrderQuantity::Unit(_)));
    }

    #[rstest]
    fn test_to_validated_order_line_empty_id() {
        let line =
            UnvalidatedOrderLine::new(String::new(), "W1234".to_string(), Decimal::from(10));

        let error = to_validated_order_line(&product_in_catalog(), &line).failure().unwrap();

        assert_eq!(error.field_name, "OrderLineId");
    }

    #[rstest]
    fn test_to_validated_order_line_quantity_out_of_range() {
        let line = UnvalidatedOrderLine::new(
            "line-001".to_string(),
            "W1234".to_string(),
            Decimal::from(1001),
        );

        let error = to_validated_order_line(&product_in_catalog(), &line).failure().unwrap();

        assert_eq!(error.field_name, "Quantity");
    }

    // =========================================================================
    // validate_order
    // =========================================================================

    #[rstest]
    fn test_validate_order_success() {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let outcome = runtime.block_on(
            validate_order(product_in_catalog(), address_service_approves(), &valid_order())
                .run(),
        );

        let validated = outcome.success().unwrap();
        assert_eq!(validated.order_id().value(), "order-001");
        assert_eq!(validated.customer_info().name().last_name().value(), "Kubo");
        assert_eq!(validated.shipping_address().city().value(), "Fukuoka");
        assert_eq!(validated.lines().len(), 1);
    }

    #[rstest]
    fn test_validate_order_multiple_lines_keep_order() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let order = UnvalidatedOrder::new(
            "order-001".to_string(),
            valid_customer(),
            valid_address(),
            valid_address(),
            vec![
                valid_line(),
                UnvalidatedOrderLine::new(
                    "line-002".to_string(),
                    "G123".to_string(),
                    Decimal::from_str("2.50").unwrap(),
                ),
            ],
        );

        let outcome = runtime.block_on(
            validate_order(product_in_catalog(), address_service_approves(), &order).run(),
        );

        let validated = outcome.success().unwrap();
        assert_eq!(validated.lines()[0].order_line_id().value(), "line-001");
        assert_eq!(validated.lines()[1].order_line_id().value(), "line-002");
    }

    #[rstest]
    fn test_validate_order_bad_order_id_skips_collaborators() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let address_calls = Arc::new(AtomicUsize::new(0));
        let address_calls_clone = Arc::clone(&address_calls);
        let check_address = move |address: UnvalidatedAddress| {
            address_calls_clone.fetch_add(1, Ordering::SeqCst);
            AsyncOutcome::succeed(CheckedAddress::new(address))
        };
        let order = UnvalidatedOrder::new(
            String::new(),
            valid_customer(),
            valid_address(),
            valid_address(),
            vec![valid_line()],
        );

        let outcome =
            runtime.block_on(validate_order(product_in_catalog(), check_address, &order).run());

        assert_eq!(outcome.failure().unwrap().field_name, "OrderId");
        assert_eq!(address_calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_validate_order_shipping_rejection_skips_billing_check() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        // First call (shipping) is rejected; a second call would succeed.
        let check_address = move |address: UnvalidatedAddress| {
            if calls_clone.fetch_add(1, Ordering::SeqCst) == 0 {
                AsyncOutcome::fail(AddressValidationError::NotFound)
            } else {
                AsyncOutcome::succeed(CheckedAddress::new(address))
            }
        };

        let outcome = runtime.block_on(
            validate_order(product_in_catalog(), check_address, &valid_order()).run(),
        );

        assert_eq!(outcome.failure().unwrap().message, "Address not found");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_validate_order_checks_shipping_before_billing() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let check_address = move |address: UnvalidatedAddress| {
            seen_clone.lock().unwrap().push(address.address_line1().to_string());
            AsyncOutcome::succeed(CheckedAddress::new(address))
        };
        let order = UnvalidatedOrder::new(
            "order-001".to_string(),
            valid_customer(),
            UnvalidatedAddress::new(
                "Shipping St".to_string(),
                String::new(),
                String::new(),
                String::new(),
                "Fukuoka".to_string(),
                "81000".to_string(),
            ),
            UnvalidatedAddress::new(
                "Billing Ave".to_string(),
                String::new(),
                String::new(),
                String::new(),
                "Fukuoka".to_string(),
                "81000".to_string(),
            ),
            vec![valid_line()],
        );

        let outcome =
            runtime.block_on(validate_order(product_in_catalog(), check_address, &order).run());

        assert!(outcome.is_success());
        assert_eq!(*seen.lock().unwrap(), vec!["Shipping St", "Billing Ave"]);
    }

    #[rstest]
    fn test_validate_order_first_bad_line_stops_later_lines() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let lookups = Arc::new(AtomicUsize::new(0));
        let lookups_clone = Arc::clone(&lookups);
        let check_product = move |_: &ProductCode| {
            lookups_clone.fetch_add(1, Ordering::SeqCst);
            false
        };
        let order = UnvalidatedOrder::new(
            "order-001".to_string(),
            valid_customer(),
            valid_address(),
            valid_address(),
            vec![
                valid_line(),
                UnvalidatedOrderLine::new(
                    "line-002".to_string(),
                    "G123".to_string(),
                    Decimal::from(1),
                ),
            ],
        );

        let outcome = runtime.block_on(
            validate_order(check_product, address_service_approves(), &order).run(),
        );

        assert_eq!(outcome.failure().unwrap().message, "Invalid: W1234");
        // The second line's code never reached the catalog.
        assert_eq!(lookups.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_validate_order_product_missing() {
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let outcome = runtime.block_on(
            validate_order(product_missing(), address_service_approves(), &valid_order()).run(),
        );

        assert_eq!(outcome.failure().unwrap().message, "Invalid: W1234");
    }
}
