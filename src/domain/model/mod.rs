//! Records of the OASIS xAL address schema.
//!
//! The entry point is [`Xal`]. Every field is optional: `None` (or an empty
//! sequence) means the information is not asserted and is left out of the
//! serialized document, while `Some(String::new())` is kept as an empty value.
//! Fields prefixed with `attr_` were attributes in the XML form of xAL.

mod area;
mod locality;
mod mail_user;
mod postal;
mod premise;
mod thoroughfare;

pub use area::{AdministrativeArea, AdministrativeAreaName, Country, CountryName, CountryNameCode};
pub use locality::{
    DependentLocality, DependentLocalityName, DependentLocalityNumber, Locality, LocalityName,
};
pub use mail_user::{
    Department, DepartmentName, LargeMailUser, LargeMailUserIdentifier, LargeMailUserName,
};
pub use postal::{
    PostBox, PostBoxNumber, PostOffice, PostOfficeName, PostOfficeNumber, PostalCode,
    PostalCodeNumber, PostalCodeNumberExtension,
};
pub use premise::{
    BuildingName, Premise, PremiseLocation, PremiseName, PremiseNumber, PremiseNumberSuffix,
    SubPremise, SubPremiseName, SubPremiseNumber, SubPremiseNumberSuffix,
};
pub use thoroughfare::{
    DependentThoroughfare, Thoroughfare, ThoroughfareLeadingType, ThoroughfareName,
    ThoroughfareNumber, ThoroughfareNumberFrom, ThoroughfareNumberRange, ThoroughfareNumberSuffix,
    ThoroughfareNumberTo, ThoroughfarePostDirection, ThoroughfarePreDirection,
    ThoroughfareTrailingType,
};

use serde::{Deserialize, Serialize};

/// Root element for a list of addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xal {
    /// Version number of the xAL DTD the document follows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address_details: Vec<AddressDetails>,
}

/// Details of one address. Several of them can describe multiple addresses
/// of the same subject or its address history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetails {
    /// Postal, Business, Residential, ... (maxLength=23)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_address_type: Option<String>,
    /// Moved, Living, Investment, Deceased, ... (maxLength=10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_current_status: Option<String>,
    /// Home, Business, ... (maxLength=6)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_usage: Option<String>,
    /// maxLength=11
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_valid_from_date: Option<String>,
    /// maxLength=13
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_valid_to_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_lines: Option<AddressLines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<AdministrativeArea>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<Locality>,
}

/// Free format address representation. The order of the lines is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressLines(pub Vec<AddressLine>);

/// One free format address line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressLine {
    /// Street, Address Line 1, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Used by postal services to encode the name of the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AddressLines {
    pub fn iter(&self) -> std::slice::Iter<'_, AddressLine> {
        self.0.iter()
    }
}

impl From<Vec<AddressLine>> for AddressLines {
    fn from(lines: Vec<AddressLine>) -> Self {
        Self(lines)
    }
}

impl<'a> IntoIterator for &'a AddressLines {
    type Item = &'a AddressLine;
    type IntoIter = std::slice::Iter<'a, AddressLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
