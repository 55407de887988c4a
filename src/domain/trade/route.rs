//! Raw route result returned by the quoting service, and its validator

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::shared::errors::QuoteError;
use crate::shared::utils::{is_non_negative_integer, parse_decimal};

/// Validated best-route response.
///
/// Unknown fields are ignored; a missing required field fails validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRouteResult {
    #[serde(rename = "getBestRoute", alias = "bestRoute")]
    pub best_route: BestRoute,
    #[serde(rename = "getCurrentRouteHumanArray", alias = "currentRouteHumanArray")]
    pub current_route_human_array: Vec<String>,
    #[serde(rename = "getCurrentRouteRPParams", alias = "currentRouteRPParams", default)]
    pub current_route_rp_params: Option<RouteProcessorParams>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BestRoute {
    #[serde(rename = "amountInBN", deserialize_with = "deserialize_raw_amount")]
    pub amount_in_bn: BigInt,
    #[serde(rename = "amountOutBN", deserialize_with = "deserialize_raw_amount")]
    pub amount_out_bn: BigInt,
    #[serde(rename = "priceImpact")]
    pub price_impact: f64,
    /// Gas figure as reported, scaled to native units by 1e9 downstream
    #[serde(rename = "gasSpent", deserialize_with = "deserialize_gas")]
    pub gas_spent: BigRational,
}

/// Parameters for executing the route through the route processor contract
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteProcessorParams {
    pub token_in: String,
    #[serde(deserialize_with = "deserialize_raw_amount")]
    pub amount_in: BigInt,
    pub token_out: String,
    #[serde(deserialize_with = "deserialize_raw_amount")]
    pub amount_out_min: BigInt,
    pub to: String,
    pub route_code: String,
}

impl RawRouteResult {
    /// Parse and validate a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, QuoteError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| QuoteError::Validation(format!("response is not JSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Validate an already-parsed JSON document
    pub fn from_value(value: Value) -> Result<Self, QuoteError> {
        serde_json::from_value(value).map_err(|e| QuoteError::Validation(e.to_string()))
    }

    /// Positional arguments for the on-chain swap call, when a route was found
    pub fn write_args(&self) -> Option<WriteArgs> {
        self.current_route_rp_params.as_ref().map(|params| {
            WriteArgs(
                params.token_in.clone(),
                params.amount_in.clone(),
                params.token_out.clone(),
                params.amount_out_min.clone(),
                params.to.clone(),
                params.route_code.clone(),
            )
        })
    }
}

/// `(tokenIn, amountIn, tokenOut, amountOutMin, to, routeCode)`.
///
/// Consumers index these positionally; serialises as a 6-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteArgs(
    pub String,
    pub BigInt,
    pub String,
    pub BigInt,
    pub String,
    pub String,
);

impl Serialize for WriteArgs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(6)?;
        tuple.serialize_element(&self.0)?;
        tuple.serialize_element(&self.1.to_string())?;
        tuple.serialize_element(&self.2)?;
        tuple.serialize_element(&self.3.to_string())?;
        tuple.serialize_element(&self.4)?;
        tuple.serialize_element(&self.5)?;
        tuple.end()
    }
}

/// Integer amount given as a decimal string, a JSON number, or an
/// ethers-style `{ "type": "BigNumber", "hex": "0x..." }` object
fn raw_amount_from_value(value: &Value) -> Result<BigInt, String> {
    let parsed = match value {
        Value::String(s) => parse_decimal(s),
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::Object(map) => match map.get("hex").and_then(Value::as_str) {
            Some(hex) => {
                let digits = hex.strip_prefix("0x").unwrap_or(hex);
                BigInt::parse_bytes(digits.as_bytes(), 16).map(BigRational::from_integer)
            }
            None => None,
        },
        _ => None,
    };

    match parsed {
        Some(amount) if is_non_negative_integer(&amount) => Ok(amount.to_integer()),
        _ => Err(format!("expected a non-negative integer amount, got {}", value)),
    }
}

fn deserialize_raw_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
    let value = Value::deserialize(deserializer)?;
    raw_amount_from_value(&value).map_err(serde::de::Error::custom)
}

fn deserialize_gas<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigRational, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    };
    match parsed {
        Some(gas) if !gas.is_negative() => Ok(gas),
        _ => Err(serde::de::Error::custom(format!(
            "expected a non-negative gas figure, got {}",
            value
        ))),
    }
}
