use super::{LargeMailUser, PostBox, PostOffice, PostalCode, Premise, Thoroughfare};
use serde::{Deserialize, Serialize};

/// One level below the administrative area: cities, reservations and any
/// other built-up areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    /// City, IndustrialEstate, ... (maxLength=8)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Postal or Political.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<Box<DependentLocality>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_mail_user: Option<LargeMailUser>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locality_name: Vec<LocalityName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_box: Option<PostBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office: Option<PostOffice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise: Option<Premise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare: Option<Thoroughfare>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalityName {
    /// maxLength=12
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Districts within cities or towns, postal divisions of cities, suburbs, etc.
///
/// A dependent locality may contain another one. In practice the nesting stops
/// at Locality / DependentLocality / DependentLocality, but nothing here
/// enforces that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentLocality {
    /// "VIA" in "Hill Top VIA Parish", where Parish is the locality and Hill
    /// Top the dependent locality. (maxLength=25)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_connector: Option<String>,
    /// maxLength=12
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Postal or Political.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_usage_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<Box<DependentLocality>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependent_locality_name: Vec<DependentLocalityName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependent_locality_number: Vec<DependentLocalityNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_mail_user: Option<LargeMailUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office: Option<PostOffice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise: Option<Premise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare: Option<Thoroughfare>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentLocalityName {
    /// maxLength=12
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Numbered areas, e.g. SECTOR 5 in an Indian suburb or SOI SUKUMVIT 10 in
/// Thailand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentLocalityNumber {
    /// Whether the number comes before or after the name. (maxLength=6)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_name_number_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
