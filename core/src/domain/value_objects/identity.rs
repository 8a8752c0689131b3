//! Identity inputs: verification method, national ID and mobile phone.

use serde::{Deserialize, Serialize};

use idv_shared::phone::{format_phone, is_valid_mobile_phone, mask_phone};
use idv_shared::validation::{is_valid_national_id, strip_separators};

use crate::errors::VerificationError;

/// Which input supplies the phone number a code is sent to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    /// National ID; the phone is looked up in the directory
    #[default]
    Id,
    /// Mobile phone entered directly
    Phone,
}

impl std::fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMethod::Id => write!(f, "id"),
            VerificationMethod::Phone => write!(f, "phone"),
        }
    }
}

impl std::str::FromStr for VerificationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" | "cedula" | "cédula" => Ok(VerificationMethod::Id),
            "phone" | "celular" | "mobile" => Ok(VerificationMethod::Phone),
            _ => Err(format!("Invalid verification method: {}", s)),
        }
    }
}

/// National ID (Cédula de Identidad), stored as its 8 canonical digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalId(String);

impl NationalId {
    /// Parse a national ID, ignoring whitespace and dashes
    pub fn parse(input: &str) -> Result<Self, VerificationError> {
        if !is_valid_national_id(input) {
            return Err(VerificationError::InvalidNationalId);
        }
        Ok(Self(strip_separators(input)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NationalId {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalId> for String {
    fn from(id: NationalId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mobile phone number, stored as its 9 canonical digits (`09XXXXXXX`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobilePhone(String);

impl MobilePhone {
    /// Parse a mobile phone number, ignoring whitespace and dashes
    pub fn parse(input: &str) -> Result<Self, VerificationError> {
        if !is_valid_mobile_phone(input) {
            return Err(VerificationError::InvalidMobilePhone);
        }
        Ok(Self(strip_separators(input)))
    }

    /// Canonical digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, `09X XXX XXX`
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }

    /// Display form with the middle group redacted, `09X *** XXX`
    pub fn masked(&self) -> String {
        mask_phone(&self.formatted())
    }
}

impl TryFrom<String> for MobilePhone {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MobilePhone> for String {
    fn from(phone: MobilePhone) -> Self {
        phone.0
    }
}

impl std::fmt::Display for MobilePhone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Outcome of looking up the phone registered for a national ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneResolution {
    Found(MobilePhone),
    NotFound,
}

impl PhoneResolution {
    pub fn into_phone(self) -> Option<MobilePhone> {
        match self {
            PhoneResolution::Found(phone) => Some(phone),
            PhoneResolution::NotFound => None,
        }
    }
}
