use anyhow::Result;
use serde_json::json;
use xal::{
    decode, encode, AddressDetails, AddressLine, AddressLines, AdministrativeArea,
    AdministrativeAreaName, Country, CountryNameCode, DependentLocality, DependentLocalityName,
    Format, LargeMailUser, LargeMailUserName, Locality, LocalityName, PostBox, PostBoxNumber,
    PostalCode, PostalCodeNumber, PostalCodeNumberExtension, Premise, PremiseNumber, SubPremise,
    SubPremiseNumber, Thoroughfare, ThoroughfareNumber, Xal,
};

fn line(value: &str) -> AddressLine {
    AddressLine {
        text: Some(value.to_string()),
        ..Default::default()
    }
}

fn locality_name(value: &str) -> LocalityName {
    LocalityName {
        text: Some(value.to_string()),
        ..Default::default()
    }
}

/// US style address: lines, country code and a locality.
fn springfield() -> AddressDetails {
    AddressDetails {
        address_lines: Some(AddressLines(vec![line("123 Main St"), line("Suite 400")])),
        country: Some(Country {
            country_name_code: Some(CountryNameCode {
                attr_scheme: Some("iso.3166-2".to_string()),
                text: Some("US".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        locality: Some(Locality {
            locality_name: vec![locality_name("Springfield")],
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// An address touching most of the tree, including every recursive record.
fn bangkok() -> AddressDetails {
    let dependent = DependentLocality {
        attr_type: Some("Soi".to_string()),
        dependent_locality_name: vec![DependentLocalityName {
            text: Some("SOI SUKUMVIT 3".to_string()),
            ..Default::default()
        }],
        dependent_locality: Some(Box::new(DependentLocality {
            attr_connector: Some("VIA".to_string()),
            dependent_locality_name: vec![DependentLocalityName {
                text: Some("Hill Top".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        })),
        ..Default::default()
    };

    let premise = Premise {
        attr_type: Some("Building".to_string()),
        premise_number: Some(PremiseNumber {
            attr_number_type: Some("Single".to_string()),
            code: Some("B1".to_string()),
            text: Some("12".to_string()),
            ..Default::default()
        }),
        premise: Some(Box::new(Premise {
            attr_premise_dependency: Some("PARK".to_string()),
            ..Default::default()
        })),
        sub_premise: vec![SubPremise {
            attr_type: Some("Floor".to_string()),
            sub_premise_number: vec![SubPremiseNumber {
                text: Some("12TH".to_string()),
                ..Default::default()
            }],
            sub_premise: vec![
                SubPremise {
                    attr_type: Some("Suite".to_string()),
                    ..Default::default()
                },
                SubPremise {
                    attr_type: Some("Room".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        ..Default::default()
    };

    AddressDetails {
        attr_address_type: Some("Business".to_string()),
        attr_valid_from_date: Some("2001-01-01".to_string()),
        administrative_area: Some(AdministrativeArea {
            attr_type: Some("Province".to_string()),
            administrative_area_name: vec![
                AdministrativeAreaName {
                    text: Some("Bangkok".to_string()),
                    ..Default::default()
                },
                AdministrativeAreaName {
                    attr_type: Some("Old".to_string()),
                    text: Some("Krung Thep".to_string()),
                    ..Default::default()
                },
            ],
            locality: Some(Locality {
                attr_type: Some("City".to_string()),
                locality_name: vec![locality_name("Bangkok")],
                dependent_locality: Some(Box::new(dependent.clone())),
                post_box: Some(PostBox {
                    attr_type: Some("PO".to_string()),
                    post_box_number: Some(PostBoxNumber {
                        text: Some("1234".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                large_mail_user: Some(LargeMailUser {
                    large_mail_user_name: Some(LargeMailUserName {
                        attr_type: Some("Airport".to_string()),
                        text: Some("Suvarnabhumi".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                thoroughfare: Some(Thoroughfare {
                    thoroughfare_name: Some("SUKUMVIT".into()),
                    thoroughfare_number: Some(ThoroughfareNumber {
                        text: Some("23".to_string()),
                        ..Default::default()
                    }),
                    dependent_locality: Some(Box::new(dependent)),
                    premise: Some(premise),
                    ..Default::default()
                }),
                postal_code: Some(PostalCode {
                    postal_code_number: Some(PostalCodeNumber {
                        text: Some("10110".to_string()),
                        ..Default::default()
                    }),
                    postal_code_number_extension: Some(PostalCodeNumberExtension {
                        attr_number_extension_separator: Some("-".to_string()),
                        text: Some("01".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn document() -> Xal {
    Xal {
        attr_version: Some("2.0".to_string()),
        address_details: vec![springfield(), bangkok()],
    }
}

#[test]
fn test_springfield_serializes_to_expected_keys() -> Result<()> {
    let value = serde_json::to_value(springfield())?;

    assert_eq!(
        value,
        json!({
            "address_lines": [{ "text": "123 Main St" }, { "text": "Suite 400" }],
            "country": {
                "country_name_code": { "attr_scheme": "iso.3166-2", "text": "US" }
            },
            "locality": { "locality_name": [{ "text": "Springfield" }] }
        })
    );
    assert_eq!(value["country"]["country_name_code"]["attr_scheme"], "iso.3166-2");

    let back: AddressDetails = serde_json::from_value(value)?;
    assert_eq!(back, springfield());
    Ok(())
}

#[test]
fn test_empty_document() -> Result<()> {
    let xal = Xal {
        attr_version: None,
        address_details: vec![],
    };

    let encoded = encode(&xal, Format::Json, false)?;
    assert_eq!(encoded, "{}");

    let back: Xal = decode(&encoded, Format::Json)?;
    assert_eq!(back.attr_version, None);
    assert!(back.address_details.is_empty());

    // An explicit empty sequence decodes the same way.
    let back: Xal = decode(r#"{"address_details": []}"#, Format::Json)?;
    assert_eq!(back, Xal::default());
    Ok(())
}

#[test]
fn test_full_document_round_trips_in_every_format() -> Result<()> {
    let xal = document();

    for format in Format::ALL {
        for pretty in [false, true] {
            let encoded = encode(&xal, format, pretty)?;
            let back: Xal = decode(&encoded, format)?;
            assert_eq!(back, xal, "format={} pretty={}", format, pretty);
        }
    }
    Ok(())
}

#[test]
fn test_round_trip_is_idempotent() -> Result<()> {
    for format in Format::ALL {
        let first = encode(&document(), format, true)?;
        let back: Xal = decode(&first, format)?;
        let second = encode(&back, format, true)?;
        assert_eq!(first, second, "format={}", format);
    }
    Ok(())
}

#[test]
fn test_two_level_dependent_locality_survives() -> Result<()> {
    for format in Format::ALL {
        let back: Xal = decode(&encode(&document(), format, false)?, format)?;
        let locality = back.address_details[1]
            .administrative_area
            .as_ref()
            .and_then(|area| area.locality.as_ref())
            .expect("locality");

        let outer = locality.dependent_locality.as_deref().expect("outer");
        let inner = outer.dependent_locality.as_deref().expect("inner");
        assert_eq!(outer.attr_type.as_deref(), Some("Soi"));
        assert_eq!(inner.attr_connector.as_deref(), Some("VIA"));
        assert!(inner.dependent_locality.is_none());
    }
    Ok(())
}

#[test]
fn test_sequence_order_is_preserved() -> Result<()> {
    let details = AddressDetails {
        address_lines: Some(AddressLines(vec![
            line("Attn: Receiving"),
            line("123 Main St"),
            line("Suite 400"),
        ])),
        ..Default::default()
    };
    let xal = Xal {
        address_details: vec![details],
        ..Default::default()
    };

    for format in Format::ALL {
        let back: Xal = decode(&encode(&xal, format, false)?, format)?;
        let lines: Vec<_> = back.address_details[0]
            .address_lines
            .iter()
            .flatten()
            .filter_map(|l| l.text.as_deref())
            .collect();
        assert_eq!(lines, ["Attn: Receiving", "123 Main St", "Suite 400"]);
    }
    Ok(())
}

#[test]
fn test_unset_fields_stay_absent_and_empty_strings_stay_present() -> Result<()> {
    let details = AddressDetails {
        attr_usage: Some(String::new()),
        locality: Some(Locality::default()),
        ..Default::default()
    };
    let xal = Xal {
        address_details: vec![details],
        ..Default::default()
    };

    let encoded = encode(&xal, Format::Json, false)?;
    assert_eq!(
        encoded,
        r#"{"address_details":[{"attr_usage":"","locality":{}}]}"#
    );

    for format in Format::ALL {
        let back: Xal = decode(&encode(&xal, format, false)?, format)?;
        let details = &back.address_details[0];
        assert_eq!(details.attr_usage.as_deref(), Some(""));
        assert!(details.attr_address_type.is_none());
        assert!(details.country.is_none());
        assert_eq!(details.locality, Some(Locality::default()));
        assert!(back.attr_version.is_none());
    }
    Ok(())
}

#[test]
fn test_advisory_lengths_are_not_enforced() -> Result<()> {
    let long_usage = "a usage value far longer than six characters";
    let input = json!({ "address_details": [{ "attr_usage": long_usage }] }).to_string();

    let back: Xal = decode(&input, Format::Json)?;
    assert_eq!(back.address_details[0].attr_usage.as_deref(), Some(long_usage));
    Ok(())
}
