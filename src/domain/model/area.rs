use super::{Locality, Thoroughfare};
use serde::{Deserialize, Serialize};

/// Provinces, counties, special regions (such as "Rijnmond"), etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrativeArea {
    /// Province, State, County, Kanton, ... (maxLength=8)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Postal or Political. Postal areas and politically defined areas do not
    /// always coincide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_usage_type: Option<String>,
    /// "(Dist)" in "Erode (Dist)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub administrative_area_name: Vec<AdministrativeAreaName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<Locality>,
}

/// Name of the administrative area, e.g. MI in USA, NSW in Australia.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrativeAreaName {
    /// maxLength=12
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<AdministrativeArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<CountryName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name_code: Option<CountryNameCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<Locality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare: Option<Thoroughfare>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    /// Old name, new name, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A country code according to `attr_scheme`, for instance `iso.3166-2` or
/// `iso.3166-3` for two and three character codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryNameCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
