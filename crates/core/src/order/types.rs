//! Order data types.
//!
//! These mirror the wire format of the commerce backend's order store.
//! Numeric fields the backend occasionally omits (amount, unit price,
//! quantity) deserialize to `None` and coerce to zero through the
//! accessors; the aggregator never fails on a malformed record.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfillment status of an order.
///
/// Closed set validated at the deserialization boundary; the wire carries
/// the exact display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order received, not yet being prepared.
    #[serde(rename = "Order Placed")]
    OrderPlaced,
    /// Order is being packed.
    Packing,
    /// Order handed to the carrier.
    Shipped,
    /// Order is out for delivery.
    #[serde(rename = "Out for delivery")]
    OutForDelivery,
    /// Order delivered to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order counts toward the "processing" bucket,
    /// i.e. it is neither shipped, delivered, nor cancelled.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        !matches!(self, Self::Shipped | Self::Delivered | Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OrderPlaced => "Order Placed",
            Self::Packing => "Packing",
            Self::Shipped => "Shipped",
            Self::OutForDelivery => "Out for delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Shipping address attached to an order.
///
/// Every field is optional on the wire; missing subfields are tolerated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Customer first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Customer last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Street address.
    #[serde(default)]
    pub street: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or province.
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub zipcode: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// A single ordered line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product identifier.
    #[serde(rename = "_id")]
    pub product_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price; missing/null coerces to zero via [`LineItem::unit_price`].
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Quantity ordered; missing/null coerces to zero via [`LineItem::units`].
    #[serde(default)]
    pub quantity: Option<u32>,
    /// Product category.
    #[serde(default)]
    pub category: Option<String>,
    /// Image references; the first one is used for display.
    #[serde(default)]
    pub image: Option<Vec<String>>,
    /// Selected size, if the product has one.
    #[serde(default)]
    pub size: Option<String>,
}

impl LineItem {
    /// Unit price, with a missing value coerced to zero.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// Quantity ordered, with a missing value coerced to zero.
    #[must_use]
    pub fn units(&self) -> u64 {
        u64::from(self.quantity.unwrap_or(0))
    }

    /// Revenue contributed by this line (unit price x quantity).
    #[must_use]
    pub fn line_revenue(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.units())
    }

    /// First image reference, if any.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.image.as_ref().and_then(|images| images.first()).map(String::as_str)
    }
}

/// An order record fetched from the commerce backend.
///
/// Orders are immutable inputs to the aggregator; it only ever derives
/// fresh aggregates from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Creation timestamp (epoch milliseconds on the wire).
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Order total; missing/null coerces to zero via [`Order::amount`].
    #[serde(rename = "amount", default, with = "rust_decimal::serde::float_option")]
    pub amount_raw: Option<Decimal>,
    /// Whether the payment succeeded.
    #[serde(default)]
    pub payment: bool,
    /// Payment method (e.g. "COD", "Stripe").
    #[serde(default)]
    pub payment_method: String,
    /// Fulfillment status.
    pub status: OrderStatus,
    /// Shipping address.
    #[serde(default)]
    pub address: ShippingAddress,
    /// Ordered line items.
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    /// Order total, with a missing value coerced to zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount_raw.unwrap_or(Decimal::ZERO)
    }

    /// Total units across all line items.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.items.iter().map(LineItem::units).sum()
    }

    /// Returns true if the order was placed on the given calendar day (UTC).
    #[must_use]
    pub fn placed_on(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }

    /// Short display identifier: the last 8 characters, uppercased.
    #[must_use]
    pub fn short_id(&self) -> String {
        let tail = self
            .id
            .char_indices()
            .rev()
            .nth(7)
            .map_or(0, |(index, _)| index);
        self.id[tail..].to_uppercase()
    }

    /// Identity key used to count distinct buyers: lowercased email, else
    /// phone, else concatenated first+last name, else the order id.
    ///
    /// This is an approximation. Two customers with no email or phone and
    /// the same name collide; the key is never displayed, only counted.
    #[must_use]
    pub fn buyer_key(&self) -> String {
        let address = &self.address;
        if let Some(email) = non_empty(address.email.as_deref()) {
            return email.to_lowercase();
        }
        if let Some(phone) = non_empty(address.phone.as_deref()) {
            return phone.to_string();
        }
        let name = format!(
            "{}{}",
            address.first_name.as_deref().unwrap_or(""),
            address.last_name.as_deref().unwrap_or("")
        );
        if name.is_empty() { self.id.clone() } else { name }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
