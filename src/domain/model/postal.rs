use serde::{Deserialize, Serialize};

/// Container for simple or extended postal codes. `attr_type` is Area Code,
/// Postcode, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCode {
    /// maxLength=9
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code_number: Option<PostalCodeNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code_number_extension: Option<PostalCodeNumberExtension>,
}

/// A postcode formatted by country-specific rules: `SW3 0A8-1A`, `600074`, `2067`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeNumber {
    /// Old Postal Code, new code, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// `1234` in a US ZIP+4, `1G` in the UK, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeNumberExtension {
    /// maxLength=19
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// Separator between the number and the extension, e.g. "-".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_number_extension_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A postbox like delivery point: PO Box, free mail numbers, etc. Only one
/// postbox number can be given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBox {
    /// maxLength=5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// "NO:" in "LOCKED BAG NO:1234", where the type is LOCKED BAG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_box_number: Option<PostBoxNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostBoxNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A rural post office where post is delivered, or one holding post boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOffice {
    /// maxLength=14
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
    /// "(P.O)" in "Kottivakkam (P.O)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office_name: Option<PostOfficeName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_office_number: Option<PostOfficeNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<PostalCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOfficeName {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Common in rural post offices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOfficeNumber {
    /// maxLength=3
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attr_indicator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
