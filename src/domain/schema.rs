//! Static field metadata for every xAL record.
//!
//! The serialized form only knows lower_snake keys. XML-aware consumers need
//! to know which of those keys were attributes, which were child elements and
//! which one carries the element's text, and under which xAL name. Each
//! record describes its fields through [`Record::FIELDS`].

use crate::domain::model::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Attribute,
    Element,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Zero or one value.
    Optional,
    /// Ordered, possibly empty sequence.
    Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Key in the serialized document.
    pub key: &'static str,
    /// Attribute or element name in xAL XML.
    pub xml_name: &'static str,
    pub kind: FieldKind,
    pub cardinality: Cardinality,
    /// Advisory maximum length from the xAL schema. Never enforced.
    pub max_length: Option<usize>,
}

impl Field {
    pub const fn attribute(key: &'static str, xml_name: &'static str) -> Self {
        Self {
            key,
            xml_name,
            kind: FieldKind::Attribute,
            cardinality: Cardinality::Optional,
            max_length: None,
        }
    }

    pub const fn element(key: &'static str, xml_name: &'static str) -> Self {
        Self {
            key,
            xml_name,
            kind: FieldKind::Element,
            cardinality: Cardinality::Optional,
            max_length: None,
        }
    }

    pub const fn elements(key: &'static str, xml_name: &'static str) -> Self {
        Self {
            key,
            xml_name,
            kind: FieldKind::Element,
            cardinality: Cardinality::Sequence,
            max_length: None,
        }
    }

    pub const fn text() -> Self {
        Self {
            key: "text",
            xml_name: "#text",
            kind: FieldKind::Text,
            cardinality: Cardinality::Optional,
            max_length: None,
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub fn is_attribute(&self) -> bool {
        self.kind == FieldKind::Attribute
    }
}

pub trait Record {
    /// Element name in xAL XML.
    const XML_NAME: &'static str;
    /// Fields in declaration order.
    const FIELDS: &'static [Field];

    fn field(key: &str) -> Option<&'static Field> {
        Self::FIELDS.iter().find(|f| f.key == key)
    }

    fn attributes() -> impl Iterator<Item = &'static Field> {
        Self::FIELDS.iter().filter(|f| f.kind == FieldKind::Attribute)
    }

    fn children() -> impl Iterator<Item = &'static Field> {
        Self::FIELDS.iter().filter(|f| f.kind == FieldKind::Element)
    }
}

/// Name and fields of one record, for listing the schema without naming types.
#[derive(Debug, Clone, Copy)]
pub struct RecordInfo {
    pub xml_name: &'static str,
    pub fields: &'static [Field],
}

macro_rules! records {
    ($($ty:ty => $xml:literal [$($field:expr),* $(,)?];)*) => {
        $(
            impl Record for $ty {
                const XML_NAME: &'static str = $xml;
                const FIELDS: &'static [Field] = &[$($field),*];
            }
        )*

        /// Every record of the schema, root first.
        pub const RECORDS: &[RecordInfo] = &[
            $(RecordInfo { xml_name: <$ty as Record>::XML_NAME, fields: <$ty as Record>::FIELDS },)*
        ];
    };
}

const fn attr(key: &'static str, xml_name: &'static str) -> Field {
    Field::attribute(key, xml_name)
}

const fn one(key: &'static str, xml_name: &'static str) -> Field {
    Field::element(key, xml_name)
}

const fn many(key: &'static str, xml_name: &'static str) -> Field {
    Field::elements(key, xml_name)
}

const CODE: Field = attr("attr_code", "Code");
const TEXT: Field = Field::text();

records! {
    Xal => "xAL" [
        attr("attr_version", "Version"),
        many("address_details", "AddressDetails"),
    ];
    AddressDetails => "AddressDetails" [
        attr("attr_address_type", "AddressType").max_length(23),
        attr("attr_current_status", "CurrentStatus").max_length(10),
        attr("attr_usage", "Usage").max_length(6),
        attr("attr_valid_from_date", "ValidFromDate").max_length(11),
        attr("attr_valid_to_date", "ValidToDate").max_length(13),
        one("address_lines", "AddressLines"),
        one("administrative_area", "AdministrativeArea"),
        one("country", "Country"),
        one("locality", "Locality"),
    ];
    AddressLine => "AddressLine" [
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    AdministrativeArea => "AdministrativeArea" [
        attr("attr_type", "Type").max_length(8),
        attr("attr_usage_type", "UsageType"),
        attr("attr_indicator", "Indicator"),
        many("administrative_area_name", "AdministrativeAreaName"),
        one("locality", "Locality"),
    ];
    AdministrativeAreaName => "AdministrativeAreaName" [
        attr("attr_type", "Type").max_length(12),
        CODE,
        TEXT,
    ];
    BuildingName => "BuildingName" [
        attr("attr_type", "Type"),
        attr("attr_type_occurrence", "TypeOccurrence"),
        CODE,
        TEXT,
    ];
    Country => "Country" [
        one("administrative_area", "AdministrativeArea"),
        one("country_name", "CountryName"),
        one("country_name_code", "CountryNameCode"),
        one("locality", "Locality"),
        one("thoroughfare", "Thoroughfare"),
    ];
    CountryName => "CountryName" [
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    CountryNameCode => "CountryNameCode" [
        attr("attr_scheme", "Scheme"),
        CODE,
        TEXT,
    ];
    Locality => "Locality" [
        attr("attr_type", "Type").max_length(8),
        attr("attr_usage_type", "UsageType"),
        attr("attr_indicator", "Indicator"),
        one("dependent_locality", "DependentLocality"),
        one("large_mail_user", "LargeMailUser"),
        many("locality_name", "LocalityName"),
        one("post_box", "PostBox"),
        one("post_office", "PostOffice"),
        one("postal_code", "PostalCode"),
        one("premise", "Premise"),
        one("thoroughfare", "Thoroughfare"),
    ];
    LocalityName => "LocalityName" [
        attr("attr_type", "Type").max_length(12),
        CODE,
        TEXT,
    ];
    Department => "Department" [
        attr("attr_type", "Type"),
        one("department_name", "DepartmentName"),
    ];
    DepartmentName => "DepartmentName" [
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    DependentLocality => "DependentLocality" [
        attr("attr_connector", "Connector").max_length(25),
        attr("attr_type", "Type").max_length(12),
        attr("attr_usage_type", "UsageType"),
        one("dependent_locality", "DependentLocality"),
        many("dependent_locality_name", "DependentLocalityName"),
        many("dependent_locality_number", "DependentLocalityNumber"),
        one("large_mail_user", "LargeMailUser"),
        one("post_office", "PostOffice"),
        one("premise", "Premise"),
        one("thoroughfare", "Thoroughfare"),
    ];
    DependentLocalityName => "DependentLocalityName" [
        attr("attr_type", "Type").max_length(12),
        CODE,
        TEXT,
    ];
    DependentLocalityNumber => "DependentLocalityNumber" [
        attr("attr_name_number_occurrence", "NameNumberOccurrence").max_length(6),
        CODE,
        TEXT,
    ];
    DependentThoroughfare => "DependentThoroughfare" [
        attr("attr_type", "Type"),
        one("thoroughfare_name", "ThoroughfareName"),
        one("thoroughfare_pre_direction", "ThoroughfarePreDirection"),
        one("thoroughfare_trailing_type", "ThoroughfareTrailingType"),
    ];
    LargeMailUser => "LargeMailUser" [
        attr("attr_type", "Type").max_length(8),
        one("building_name", "BuildingName"),
        one("department", "Department"),
        one("large_mail_user_identifier", "LargeMailUserIdentifier"),
        one("large_mail_user_name", "LargeMailUserName"),
    ];
    LargeMailUserIdentifier => "LargeMailUserIdentifier" [
        attr("attr_type", "Type").max_length(14),
        attr("attr_indicator", "Indicator"),
        CODE,
        TEXT,
    ];
    LargeMailUserName => "LargeMailUserName" [
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    PostBox => "PostBox" [
        attr("attr_type", "Type").max_length(5),
        attr("attr_indicator", "Indicator"),
        one("post_box_number", "PostBoxNumber"),
        one("postal_code", "PostalCode"),
    ];
    PostBoxNumber => "PostBoxNumber" [
        CODE,
        TEXT,
    ];
    PostOffice => "PostOffice" [
        attr("attr_type", "Type").max_length(14),
        attr("attr_indicator", "Indicator"),
        one("post_office_name", "PostOfficeName"),
        one("post_office_number", "PostOfficeNumber"),
        one("postal_code", "PostalCode"),
    ];
    PostOfficeName => "PostOfficeName" [
        CODE,
        TEXT,
    ];
    PostOfficeNumber => "PostOfficeNumber" [
        attr("attr_indicator", "Indicator").max_length(3),
        TEXT,
    ];
    PostalCode => "PostalCode" [
        attr("attr_type", "Type").max_length(9),
        one("postal_code_number", "PostalCodeNumber"),
        one("postal_code_number_extension", "PostalCodeNumberExtension"),
    ];
    PostalCodeNumber => "PostalCodeNumber" [
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    PostalCodeNumberExtension => "PostalCodeNumberExtension" [
        attr("attr_type", "Type").max_length(19),
        attr("attr_number_extension_separator", "NumberExtensionSeparator"),
        TEXT,
    ];
    Premise => "Premise" [
        attr("attr_premise_dependency", "PremiseDependency").max_length(7),
        attr("attr_premise_dependency_type", "PremiseDependencyType").max_length(19),
        attr("attr_type", "Type").max_length(18),
        attr("attr_premise_thoroughfare_connector", "PremiseThoroughfareConnector"),
        one("building_name", "BuildingName"),
        one("postal_code", "PostalCode"),
        one("premise", "Premise"),
        one("premise_location", "PremiseLocation"),
        one("premise_name", "PremiseName"),
        one("premise_number", "PremiseNumber"),
        one("premise_number_suffix", "PremiseNumberSuffix"),
        many("sub_premise", "SubPremise"),
    ];
    PremiseLocation => "PremiseLocation" [
        CODE,
        TEXT,
    ];
    PremiseName => "PremiseName" [
        attr("attr_type_occurrence", "TypeOccurrence").max_length(5),
        TEXT,
    ];
    PremiseNumber => "PremiseNumber" [
        attr("attr_number_type", "NumberType"),
        attr("attr_type", "Type"),
        attr("attr_indicator", "Indicator"),
        attr("attr_indicator_occurrence", "IndicatorOccurrence"),
        attr("attr_number_type_occurrence", "NumberTypeOccurrence"),
        attr("code", "Code"),
        TEXT,
    ];
    PremiseNumberSuffix => "PremiseNumberSuffix" [
        attr("attr_number_prefix_separator", "NumberPrefixSeparator"),
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    SubPremise => "SubPremise" [
        attr("attr_type", "Type").max_length(9),
        many("sub_premise", "SubPremise"),
        many("sub_premise_name", "SubPremiseName"),
        many("sub_premise_number", "SubPremiseNumber"),
        one("sub_premise_number_suffix", "SubPremiseNumberSuffix"),
    ];
    SubPremiseName => "SubPremiseName" [
        attr("attr_type", "Type"),
        attr("attr_type_occurrence", "TypeOccurrence"),
        CODE,
        TEXT,
    ];
    SubPremiseNumber => "SubPremiseNumber" [
        attr("attr_indicator", "Indicator"),
        attr("attr_indicator_occurrence", "IndicatorOccurrence"),
        attr("attr_number_type_occurrence", "NumberTypeOccurrence"),
        attr("attr_premise_number_separator", "PremiseNumberSeparator"),
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    SubPremiseNumberSuffix => "SubPremiseNumberSuffix" [
        attr("attr_number_suffix_separator", "NumberSuffixSeparator"),
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    Thoroughfare => "Thoroughfare" [
        attr("attr_dependent_thoroughfares", "DependentThoroughfares").max_length(3),
        attr("attr_dependent_thoroughfares_connector", "DependentThoroughfaresConnector").max_length(3),
        attr("attr_dependent_thoroughfares_indicator", "DependentThoroughfaresIndicator").max_length(9),
        attr("attr_dependent_thoroughfares_type", "DependentThoroughfaresType"),
        attr("attr_type", "Type").max_length(6),
        one("dependent_locality", "DependentLocality"),
        one("dependent_thoroughfare", "DependentThoroughfare"),
        one("postal_code", "PostalCode"),
        one("premise", "Premise"),
        one("thoroughfare_leading_type", "ThoroughfareLeadingType"),
        one("thoroughfare_name", "ThoroughfareName"),
        one("thoroughfare_number", "ThoroughfareNumber"),
        one("thoroughfare_number_range", "ThoroughfareNumberRange"),
        one("thoroughfare_number_suffix", "ThoroughfareNumberSuffix"),
        one("thoroughfare_post_direction", "ThoroughfarePostDirection"),
        one("thoroughfare_pre_direction", "ThoroughfarePreDirection"),
        one("thoroughfare_trailing_type", "ThoroughfareTrailingType"),
    ];
    ThoroughfareNumber => "ThoroughfareNumber" [
        attr("attr_type", "Type"),
        attr("attr_number_type", "NumberType"),
        attr("attr_indicator", "Indicator").max_length(3),
        attr("attr_indicator_occurrence", "IndicatorOccurrence").max_length(6),
        attr("attr_number_occurrence", "NumberOccurrence"),
        TEXT,
    ];
    ThoroughfareNumberFrom => "ThoroughfareNumberFrom" [
        CODE,
        one("thoroughfare_number", "ThoroughfareNumber"),
    ];
    ThoroughfareNumberRange => "ThoroughfareNumberRange" [
        attr("attr_indicator", "Indicator").max_length(2),
        attr("attr_type", "Type").max_length(4),
        one("thoroughfare_number_from", "ThoroughfareNumberFrom"),
        one("thoroughfare_number_to", "ThoroughfareNumberTo"),
    ];
    ThoroughfareNumberSuffix => "ThoroughfareNumberSuffix" [
        attr("attr_number_suffix_separator", "NumberSuffixSeparator"),
        attr("attr_type", "Type"),
        CODE,
        TEXT,
    ];
    ThoroughfareNumberTo => "ThoroughfareNumberTo" [
        CODE,
        one("thoroughfare_number", "ThoroughfareNumber"),
    ];
    ThoroughfarePostDirection => "ThoroughfarePostDirection" [
        CODE,
        TEXT,
    ];
    ThoroughfarePreDirection => "ThoroughfarePreDirection" [
        CODE,
        TEXT,
    ];
    ThoroughfareTrailingType => "ThoroughfareTrailingType" [
        CODE,
        TEXT,
    ];
}

/// Finds a record by its xAL name, ignoring case.
pub fn lookup_record(name: &str) -> Option<&'static RecordInfo> {
    RECORDS
        .iter()
        .find(|r| r.xml_name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_record_names_are_unique() {
        let names: HashSet<_> = RECORDS.iter().map(|r| r.xml_name).collect();
        assert_eq!(names.len(), RECORDS.len());
    }

    #[test]
    fn test_keys_are_unique_within_a_record() {
        for record in RECORDS {
            let keys: HashSet<_> = record.fields.iter().map(|f| f.key).collect();
            assert_eq!(keys.len(), record.fields.len(), "duplicate key in {}", record.xml_name);
        }
    }

    #[test]
    fn test_attribute_keys_carry_the_attr_prefix() {
        for record in RECORDS {
            for field in record.fields {
                let prefixed = field.key.starts_with("attr_");
                let premise_code = record.xml_name == "PremiseNumber" && field.key == "code";
                assert_eq!(
                    field.is_attribute(),
                    prefixed || premise_code,
                    "{}.{}",
                    record.xml_name,
                    field.key
                );
            }
        }
    }

    #[test]
    fn test_lookup_record_ignores_case() {
        let record = lookup_record("postalcode").unwrap();
        assert_eq!(record.xml_name, "PostalCode");
        assert!(lookup_record("Street").is_none());
    }

    #[test]
    fn test_record_trait_helpers() {
        assert_eq!(Locality::field("locality_name").unwrap().cardinality, Cardinality::Sequence);
        assert_eq!(AddressDetails::field("attr_address_type").unwrap().max_length, Some(23));
        assert!(Country::attributes().next().is_none());
        assert_eq!(PostalCode::children().count(), 2);
        assert!(Xal::field("text").is_none());
    }
}
