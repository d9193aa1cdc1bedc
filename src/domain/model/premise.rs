use super::PostalCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Whether the name comes before or after the type, e.g. EGIS BUILDING.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A single premise such as a house or a building, identified by a premise
/// (house) number or a premise name.
///
/// More than one premise can be referenced, for example a building near a
/// shopping centre or railway station, so a premise may contain another one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premise {
    /// STREET, PREMISE, SUBPREMISE, PARK, FARM, ... (maxLength=7)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_premise_dependency: Option<String>,
    /// NEAR, ADJACENT TO, ... (maxLength=19)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_premise_dependency_type: Option<String>,
    /// COMPLEXE in COMPLEXE DES JARDINS, A building, station, ... (maxLength=18)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// DES, DE, LA, DU in RUE DU BOIS: terms between a type and a name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_premise_thoroughfare_connector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<BuildingName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise: Option<Box<Premise>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise_location: Option<PremiseLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise_name: Option<PremiseName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise_number: Option<PremiseNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premise_number_suffix: Option<PremiseNumberSuffix>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_premise: Vec<SubPremise>,
}

/// LOBBY, BASEMENT, GROUND FLOOR, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Name of a premise that cannot be addressed by street name plus number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseName {
    /// EGIS occurs before Building in EGIS Building. (maxLength=5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Identifier of the premise: a number, a letter or a combination of both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseNumber {
    /// "Range" for Building 12-14, "Single" for Building 12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// "No." in House No.12, "#" in #12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_type_occurrence: Option<String>,
    /// The xAL `Code` attribute. Serialized as `code`, without the `attr_`
    /// prefix every other attribute carries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// "A" in 12A.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiseNumberSuffix {
    /// "-" in A-12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_prefix_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Apartments, suites and similar units inside a premise. Sub-premises nest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPremise {
    /// maxLength=9
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_premise: Vec<SubPremise>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_premise_name: Vec<SubPremiseName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_premise_number: Vec<SubPremiseNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_premise_number_suffix: Option<SubPremiseNumberSuffix>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPremiseName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type_occurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Identifier of a sub-premise. When it mixes numbers and letters there is
/// exactly one variable part surrounded by a fixed prefix or postfix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPremiseNumber {
    /// "TH" in 12TH, "NO." in NO.1, "#" in APT #12.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator_occurrence: Option<String>,
    /// 12TH occurs before FLOOR in 12TH FLOOR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_type_occurrence: Option<String>,
    /// "/" in 12/14 Archer Street, 12 being the sub-premise number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_premise_number_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPremiseNumberSuffix {
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
