//! warframe.market API response types.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{ItemId, RawOrder};
use crate::error::FetchError;

/// Envelope of `GET /items/{item}/orders`.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub payload: Option<OrdersPayload>,
}

#[derive(Debug, Deserialize)]
pub struct OrdersPayload {
    /// Orders are kept as raw values so one bad record cannot fail the batch.
    pub orders: Option<Vec<Value>>,
}

/// One order record on the wire.
#[derive(Debug, Deserialize)]
pub struct OrderDto {
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub platinum: Option<i64>,
    #[serde(default)]
    pub user: Option<UserDto>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub mod_rank: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub rank: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    #[serde(default)]
    pub ingame_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<OrderDto> for RawOrder {
    fn from(dto: OrderDto) -> Self {
        let (seller_name, seller_status) = match dto.user {
            Some(user) => (user.ingame_name, user.status),
            None => (None, None),
        };
        Self {
            order_type: dto.order_type.unwrap_or_default(),
            price: dto.platinum,
            seller_name,
            seller_status,
            rank: dto.mod_rank.or(dto.rank),
        }
    }
}

/// Accept integers, integral-looking floats and numeric strings.
///
/// Anything else, including `null`, becomes `None`.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_int))
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Decode an orders response body into raw orders.
///
/// A body without `payload` is an unexpected shape and fails the whole
/// fetch; missing or `null` orders mean no orders. Individual records that
/// do not decode are dropped.
pub fn parse_orders(item: &ItemId, body: Value) -> Result<Vec<RawOrder>, FetchError> {
    let response: OrdersResponse =
        serde_json::from_value(body).map_err(|e| FetchError::Payload {
            item: item.to_string(),
            reason: e.to_string(),
        })?;

    let payload = response.payload.ok_or_else(|| FetchError::Payload {
        item: item.to_string(),
        reason: "missing payload".into(),
    })?;

    let records = payload.orders.unwrap_or_default();
    let total = records.len();
    let orders: Vec<RawOrder> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<OrderDto>(record) {
            Ok(dto) => Some(RawOrder::from(dto)),
            Err(e) => {
                debug!(item = %item, error = %e, "Dropping malformed order");
                None
            }
        })
        .collect();

    if orders.len() < total {
        debug!(item = %item, dropped = total - orders.len(), "Some orders were malformed");
    }
    Ok(orders)
}
