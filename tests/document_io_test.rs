use anyhow::Result;
use tempfile::TempDir;
use xal::core::codec::write_document_as;
use xal::{
    read_document, write_document, AddressDetails, Country, CountryName, Format, ToolConfig,
    Xal, XalError,
};

fn sample() -> Xal {
    Xal {
        attr_version: Some("2.0".to_string()),
        address_details: vec![AddressDetails {
            attr_address_type: Some("Postal".to_string()),
            country: Some(Country {
                country_name: Some(CountryName {
                    attr_type: Some("New".to_string()),
                    text: Some("Netherlands".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }],
    }
}

#[test]
fn test_write_then_read_json_and_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;

    for name in ["addresses.json", "addresses.toml"] {
        let path = temp_dir.path().join(name);
        write_document(&path, &sample(), true)?;
        assert!(path.exists());

        let back = read_document(&path)?;
        assert_eq!(back, sample(), "{}", name);
    }
    Ok(())
}

#[test]
fn test_toml_file_is_readable_toml() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("addresses.toml");
    write_document(&path, &sample(), true)?;

    let content = std::fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    assert_eq!(value["attr_version"].as_str(), Some("2.0"));
    assert_eq!(
        value["address_details"][0]["country"]["country_name"]["text"].as_str(),
        Some("Netherlands")
    );
    Ok(())
}

#[test]
fn test_parent_directories_are_created() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("nested").join("deeper").join("out.json");

    write_document(&path, &Xal::default(), false)?;

    assert_eq!(std::fs::read_to_string(&path)?, "{}");
    Ok(())
}

#[test]
fn test_explicit_format_ignores_extension() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("addresses.txt");

    write_document_as(&path, &sample(), Format::Toml, false)?;

    let content = std::fs::read_to_string(&path)?;
    let back: Xal = xal::decode(&content, Format::Toml)?;
    assert_eq!(back, sample());
    Ok(())
}

#[test]
fn test_unsupported_extension_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("addresses.xml");
    std::fs::write(&path, "<xAL/>")?;

    assert!(matches!(
        read_document(&path),
        Err(XalError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        write_document(&path, &sample(), false),
        Err(XalError::UnsupportedFormat { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = read_document("/definitely/not/here/addresses.json").unwrap_err();
    assert!(matches!(err, XalError::IoError(_)));
}

#[test]
fn test_malformed_document_is_a_decode_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{"address_details": {"not": "a list"}}"#)?;

    assert!(matches!(read_document(&path), Err(XalError::JsonError(_))));
    Ok(())
}

#[test]
fn test_tool_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("xal.toml");
    std::fs::write(&path, "[output]\nformat = \"toml\"\npretty = true\n")?;

    let config = ToolConfig::load(path.to_str())?;
    assert_eq!(config.output_format()?, Format::Toml);
    assert!(config.pretty());
    Ok(())
}
