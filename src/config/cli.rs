use super::ToolConfig;
use crate::core::codec::Format;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_one_of, validate_path, Validate};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "xal")]
#[command(about = "Convert and inspect xAL address documents")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Write log lines as JSON")]
    pub log_json: bool,

    /// Path to a TOML configuration file (defaults to ./xal.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a document between JSON and TOML
    Convert(ConvertArgs),
    /// Decode a document and report what it holds
    Check {
        #[arg(short, long)]
        input: String,
    },
    /// List the records of the schema, or the fields of one record
    Schema { record: Option<String> },
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    #[arg(short, long)]
    pub input: String,

    #[arg(short, long)]
    pub output: String,

    /// Output format; overrides the output file extension
    #[arg(long)]
    pub format: Option<String>,

    #[arg(long)]
    pub pretty: bool,
}

impl ConvertArgs {
    /// `--format`, then the output extension, then the config file.
    pub fn output_format(&self, config: &ToolConfig) -> Result<Format> {
        if let Some(format) = &self.format {
            return format.parse();
        }
        match Format::from_path(&self.output) {
            Ok(format) => Ok(format),
            Err(_) => config.output_format(),
        }
    }

    pub fn pretty(&self, config: &ToolConfig) -> bool {
        self.pretty || config.pretty()
    }
}

impl Validate for ConvertArgs {
    fn validate(&self) -> Result<()> {
        let extensions: Vec<&str> = Format::ALL.iter().map(|f| f.extension()).collect();

        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &extensions)?;
        validate_path("output", &self.output)?;
        if let Some(format) = &self.format {
            validate_one_of("format", format, &extensions)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_parse_convert() {
        let cli = parse(&["xal", "-v", "convert", "-i", "in.json", "-o", "out.toml", "--pretty"]);
        assert!(cli.verbose);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.input, "in.json");
                assert_eq!(args.output, "out.toml");
                assert!(args.pretty);
                assert!(args.validate().is_ok());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_precedence() {
        let config = ToolConfig::from_toml_str("[output]\nformat = \"toml\"\n").unwrap();
        let mut args = ConvertArgs {
            input: "in.json".to_string(),
            output: "out.json".to_string(),
            format: None,
            pretty: false,
        };
        assert_eq!(args.output_format(&config).unwrap(), Format::Json);

        args.output = "out.txt".to_string();
        assert_eq!(args.output_format(&config).unwrap(), Format::Toml);

        args.format = Some("json".to_string());
        assert_eq!(args.output_format(&config).unwrap(), Format::Json);
    }

    #[test]
    fn test_convert_args_validation() {
        let args = ConvertArgs {
            input: "in.xml".to_string(),
            output: "out.json".to_string(),
            format: None,
            pretty: false,
        };
        assert!(args.validate().is_err());

        let args = ConvertArgs {
            input: "in.json".to_string(),
            output: "out.json".to_string(),
            format: Some("yaml".to_string()),
            pretty: false,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_parse_schema_with_global_flag_after_subcommand() {
        let cli = parse(&["xal", "schema", "Premise", "--config", "custom.toml"]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Command::Schema { record: Some(ref r) } if r == "Premise"));
    }
}
