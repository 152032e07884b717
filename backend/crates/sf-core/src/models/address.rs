//! Shipping address - the single postal address kept per user.

use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Required fields, in the order they are checked.
pub const ADDRESS_REQUIRED_FIELDS: [&str; 4] = ["pincode", "address", "city", "state"];

const PINCODE_LENGTH: usize = 6;

/// A validated shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub pincode: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

/// Address as submitted by a client, before validation.
///
/// Fields keep their raw JSON value: a falsy value (absent, `null`,
/// `false`, `0`, `""`) is reported as "<field> is required" rather than
/// failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressInput {
    pub pincode: Option<Value>,
    pub address: Option<Value>,
    pub city: Option<Value>,
    pub state: Option<Value>,
}

impl AddressInput {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "pincode" => self.pincode.as_ref(),
            "address" => self.address.as_ref(),
            "city" => self.city.as_ref(),
            _ => self.state.as_ref(),
        }
    }

    #[track_caller]
    fn text(&self, name: &str) -> CoreErrorResult<String> {
        match self.field(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            _ => Err(CoreError::validation(
                name,
                format!("{} must be a string", name),
            )),
        }
    }

    #[track_caller]
    pub fn validate(self) -> CoreErrorResult<Address> {
        for field in ADDRESS_REQUIRED_FIELDS {
            if is_falsy(self.field(field)) {
                return Err(CoreError::required(field));
            }
        }

        let pincode = self.text("pincode")?;
        let address = self.text("address")?;
        let city = self.text("city")?;
        let state = self.text("state")?;

        if !is_valid_pincode(&pincode) {
            return Err(CoreError::validation("pincode", "Invalid pincode format"));
        }

        Ok(Address {
            pincode,
            address,
            city,
            state,
        })
    }
}

impl From<Address> for AddressInput {
    fn from(address: Address) -> Self {
        Self {
            pincode: Some(Value::String(address.pincode)),
            address: Some(Value::String(address.address)),
            city: Some(Value::String(address.city)),
            state: Some(Value::String(address.state)),
        }
    }
}

/// Absent, `null`, `false`, zero and `""` count as missing.
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == PINCODE_LENGTH && pincode.bytes().all(|b| b.is_ascii_digit())
}
