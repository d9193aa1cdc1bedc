use super::{DependentLocality, PostalCode, Premise};
use serde::{Deserialize, Serialize};

/// A road, street, canal, river, etc.
///
/// Large streets are sometimes divided into numbered subdivisions carrying
/// the road name, as in `SOI SUKUMVIT 3, SUKUMVIT RD, BANGKOK`; those are
/// dependent localities of the thoroughfare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thoroughfare {
    /// maxLength=3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_dependent_thoroughfares: Option<String>,
    /// maxLength=3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_dependent_thoroughfares_connector: Option<String>,
    /// maxLength=9
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_dependent_thoroughfares_indicator: Option<String>,
    /// STS in GEORGE and ADELAIDE STS. Only when both street types are the same.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_dependent_thoroughfares_type: Option<String>,
    /// maxLength=6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<Box<DependentLocality>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare: Option<DependentThoroughfare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise: Option<Premise>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_leading_type: Option<ThoroughfareLeadingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_name: Option<ThoroughfareName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number: Option<ThoroughfareNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number_range: Option<ThoroughfareNumberRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number_suffix: Option<ThoroughfareNumberSuffix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_post_direction: Option<ThoroughfarePostDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_pre_direction: Option<ThoroughfarePreDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_trailing_type: Option<ThoroughfareTrailingType>,
}

/// A street related to the thoroughfare; occurs in GB, IE, ES, PT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentThoroughfare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_name: Option<ThoroughfareName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_pre_direction: Option<ThoroughfarePreDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_trailing_type: Option<ThoroughfareTrailingType>,
}

/// Type appearing before the name: Avenida in "Avenida Aurora", Rue in "Rue Moliere".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoroughfareLeadingType(pub String);

/// Street name, canal name, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThoroughfareName(pub String);

impl From<&str> for ThoroughfareLeadingType {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ThoroughfareName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ThoroughfareName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 23 in "23 Archer street", 25/15 in "25/15 Zero Avenue".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// "Single" for 12 Archer Street, "Range" for 12-14 Archer Street.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_type: Option<String>,
    /// "No." in Street No.12, "#" in Street # 12. (maxLength=3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    /// maxLength=6
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator_occurrence: Option<String>,
    /// 23 Archer St, Archer Street 23, St Archer 23
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Starting number of a range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareNumberFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number: Option<ThoroughfareNumber>,
}

/// Ending number of a range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareNumberTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number: Option<ThoroughfareNumber>,
}

/// Numbers from x thru y, as in "1-2 Albert Av".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareNumberRange {
    /// maxLength=2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    /// maxLength=4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number_from: Option<ThoroughfareNumberFrom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoroughfare_number_to: Option<ThoroughfareNumberTo>,
}

/// "A" in 12A Archer Street.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareNumberSuffix {
    /// "-" in 12-A.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_suffix_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// North in "221-bis Baker Street North"; appears after the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfarePostDirection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// North in "North Baker Street"; appears before the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfarePreDirection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Lane in "Baker Lane"; appears after the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoroughfareTrailingType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
