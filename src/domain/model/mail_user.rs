use super::BuildingName;
use serde::{Deserialize, Serialize};

/// Address of a large mail user: postal companies, French companies with a
/// cedex number, hospitals and airports with their own post code.
///
/// In the Netherlands these addresses carry no street or premise, in France
/// they also have a post box and a street.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeMailUser {
    /// maxLength=8
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<BuildingName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_mail_user_identifier: Option<LargeMailUserIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_mail_user_name: Option<LargeMailUserName>,
}

/// Identification number of a large mail user, e.g. a French Cedex code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeMailUserIdentifier {
    /// maxLength=14
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// "Building" in "Building 429".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// e.g. Smith Ford International airport
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargeMailUserName {
    /// Airport, Hospital, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Subdivision in the firm: the School of Physics at Victoria University.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// School, Division, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_name: Option<DepartmentName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
