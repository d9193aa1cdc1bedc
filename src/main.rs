use clap::Parser;
use xal::config::{Command, ConvertArgs};
use xal::core::codec::{read_document, write_document_as};
use xal::utils::{logger, validation::Validate};
use xal::{lookup_record, CliConfig, FieldKind, ToolConfig, XalError, RECORDS};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> Result<(), XalError> {
    // 載入並驗證配置
    let config = ToolConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match &cli.command {
        Command::Convert(args) => convert(args, &config),
        Command::Check { input } => check(input),
        Command::Schema { record } => schema(record.as_deref()),
    }
}

fn convert(args: &ConvertArgs, config: &ToolConfig) -> Result<(), XalError> {
    args.validate()?;

    let format = args.output_format(config)?;
    let xal = read_document(&args.input)?;
    write_document_as(&args.output, &xal, format, args.pretty(config))?;

    println!("✅ {} -> {} ({})", args.input, args.output, format);
    Ok(())
}

fn check(input: &str) -> Result<(), XalError> {
    let xal = read_document(input)?;

    println!(
        "✅ {}: {} address(es), version {}",
        input,
        xal.address_details.len(),
        xal.attr_version.as_deref().unwrap_or("unset")
    );
    Ok(())
}

fn schema(record: Option<&str>) -> Result<(), XalError> {
    let Some(name) = record else {
        for record in RECORDS {
            println!("{}", record.xml_name);
        }
        return Ok(());
    };

    let record = lookup_record(name).ok_or_else(|| XalError::UnknownRecord {
        name: name.to_string(),
    })?;

    println!("{}", record.xml_name);
    for field in record.fields {
        let kind = match field.kind {
            FieldKind::Attribute => "attribute",
            FieldKind::Element => "element",
            FieldKind::Text => "text",
        };
        let max_length = field
            .max_length
            .map(|n| format!(" (maxLength={})", n))
            .unwrap_or_default();
        println!(
            "  {:<42} {:<10} {:?} {}{}",
            field.key, kind, field.cardinality, field.xml_name, max_length
        );
    }
    Ok(())
}
