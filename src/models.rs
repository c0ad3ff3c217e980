use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO country code assigned to every enriched contact.
pub const COUNTRY_CODE_PERU: &str = "PE";

// ============ Host Reference Data ============

/// Identification type record owned by the host platform.
///
/// The host enumeration holds more values than the two this crate can query
/// (DNI, RUC), so the name stays free-form and is resolved at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentificationType {
    /// Identifier of the record in the host's reference table.
    pub id: i64,
    /// Display name, e.g. "DNI", "RUC", "CE".
    pub name: String,
}

impl IdentificationType {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Identifier of a state/province record in the host's reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateId(pub i64);

/// Identifier of a district record in the host's reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistrictId(pub i64);

// ============ Contact Model ============

/// Contact (partner) fields this crate reads and populates.
///
/// The host platform owns the full contact entity; these are the extension
/// fields the lookup handler works against. Target fields are mutated only
/// inside [`crate::enrichment::enrich_from_identification`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    /// Contact or legal name.
    pub name: String,
    /// True only after a successful RUC lookup; DNI lookups never touch it.
    pub is_company: bool,
    /// Raw identity number as typed by the user; format unvalidated here.
    pub vat: Option<String>,
    /// Selected identification type.
    pub identification_type: Option<IdentificationType>,
    /// Mirror of `identification_type` kept for the host's LATAM
    /// localization layer.
    pub l10n_latam_identification_type: Option<IdentificationType>,
    /// ISO country code.
    pub country_code: Option<String>,
    /// State/province reference, resolved by exact name.
    pub state: Option<StateId>,
    /// Free-text city field.
    pub city: Option<String>,
    /// District reference, resolved by exact name.
    pub district: Option<DistrictId>,
    /// Street address.
    pub street: Option<String>,
    /// Postal code (ubigeo).
    pub zip: Option<String>,
}

// ============ Lookup Dispatch ============

/// The two identification kinds the lookup API can resolve.
///
/// Each kind owns its endpoint path and request payload, so dispatch is a
/// table lookup with an explicit unsupported case instead of string
/// branching spread across the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Dni,
    Ruc,
}

impl LookupKind {
    /// Resolves a kind from an identification type name.
    ///
    /// Comparison is exact and case-sensitive: only the literals "DNI" and
    /// "RUC" are recognized.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "DNI" => Some(LookupKind::Dni),
            "RUC" => Some(LookupKind::Ruc),
            _ => None,
        }
    }

    /// Path of the lookup endpoint, relative to the configured base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            LookupKind::Dni => "api/dni",
            LookupKind::Ruc => "api/ruc",
        }
    }

    /// JSON request body for the given identity number.
    pub fn request_body(&self, number: &str) -> serde_json::Value {
        match self {
            LookupKind::Dni => serde_json::json!({ "dni": number }),
            LookupKind::Ruc => serde_json::json!({ "ruc": number }),
        }
    }
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKind::Dni => write!(f, "DNI"),
            LookupKind::Ruc => write!(f, "RUC"),
        }
    }
}

// ============ Wire Types ============

/// Top-level response envelope returned by both lookup endpoints.
///
/// A missing `success` flag counts as a failed lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

/// Address block shared by both response shapes.
///
/// Absent keys degrade to `None`; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressRecord {
    pub direccion: Option<String>,
    pub departamento: Option<String>,
    pub provincia: Option<String>,
    pub distrito: Option<String>,
    pub ubigeo_sunat: Option<String>,
}

/// Payload of a successful RUC (business) lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RucRecord {
    pub nombre_o_razon_social: Option<String>,
    #[serde(flatten)]
    pub address: AddressRecord,
}

/// Payload of a successful DNI (individual) lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DniRecord {
    pub nombre_completo: Option<String>,
    #[serde(flatten)]
    pub address: AddressRecord,
}
