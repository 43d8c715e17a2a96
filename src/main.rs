//! thaikey - romanized Thai to Thai script converter

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use thaikey::config::{load_config, save_config, ThaikeyConfig};
use thaikey::{Converter, Dictionary, DictionaryEntry, DictionaryError};

#[derive(Parser)]
#[command(name = "thaikey", about = "Convert romanized Thai to Thai script")]
struct Cli {
    /// Romanized text; reads stdin line by line when omitted
    text: Vec<String>,
    /// List alternative spellings instead of converting
    #[arg(short, long)]
    suggest: bool,
    /// Maximum number of suggestions (overrides the config file)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
    /// JSON dictionary appended to the built-in one (overrides the config file)
    #[arg(short, long)]
    dictionary: Option<String>,
    /// Print suggestion weights (overrides the config file)
    #[arg(short, long)]
    weights: bool,
    /// Write the effective settings to the config file
    #[arg(long)]
    save: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    fn apply(&self, config: &mut ThaikeyConfig) {
        if let Some(limit) = self.limit {
            config.suggestion_limit = limit;
        }
        if let Some(path) = &self.dictionary {
            config.user_dictionary = Some(path.clone());
        }
        if self.weights {
            config.show_weights = true;
        }
    }
}

/// Built-in dictionary plus the configured user dictionary, if any
fn build_converter(config: &ThaikeyConfig) -> Result<Converter, DictionaryError> {
    let mut dictionary = Dictionary::builtin();
    if let Some(path) = &config.user_dictionary {
        dictionary.extend_from_file(path)?;
    }
    Ok(Converter::with_dictionary(dictionary))
}

/// One suggestion line: `thai<TAB>roman[<TAB>weight]`
fn format_suggestion(entry: &DictionaryEntry, show_weights: bool) -> String {
    if show_weights {
        format!("{}\t{}\t{}", entry.thai, entry.roman, entry.weight)
    } else {
        format!("{}\t{}", entry.thai, entry.roman)
    }
}

/// Convert or suggest for one input line
fn handle_line(
    converter: &Converter,
    config: &ThaikeyConfig,
    suggest: bool,
    line: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    if !suggest {
        return writeln!(out, "{}", converter.convert_phrase(line));
    }

    for entry in converter.suggest(line.trim(), config.suggestion_limit) {
        writeln!(out, "{}", format_suggestion(&entry, config.show_weights))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = load_config();
    cli.apply(&mut config);

    let converter = match build_converter(&config) {
        Ok(converter) => converter,
        Err(e) => {
            let path = config.user_dictionary.as_deref().unwrap_or_default();
            log::error!("{}: {}", path, e);
            eprintln!("thaikey: cannot load dictionary {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    if cli.save {
        match save_config(&config) {
            Ok(path) => log::info!("saved {}", path.display()),
            Err(e) => {
                eprintln!("thaikey: {}", e);
                return ExitCode::FAILURE;
            }
        }
        if cli.text.is_empty() {
            return ExitCode::SUCCESS;
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if cli.text.is_empty() {
        io::stdin().lock().lines().try_for_each(|line| {
            handle_line(&converter, &config, cli.suggest, &line?, &mut out)
        })
    } else {
        handle_line(&converter, &config, cli.suggest, &cli.text.join(" "), &mut out)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // closed pipe
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &ThaikeyConfig, suggest: bool, line: &str) -> String {
        let converter = build_converter(config).unwrap();
        let mut out = Vec::new();
        handle_line(&converter, config, suggest, line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_suggestion() {
        let entry = DictionaryEntry::new("aroy", "อร่อย", 999);
        assert_eq!(format_suggestion(&entry, false), "อร่อย\taroy");
        assert_eq!(format_suggestion(&entry, true), "อร่อย\taroy\t999");
    }

    #[test]
    fn test_convert_line() {
        let config = ThaikeyConfig::default();
        assert_eq!(run(&config, false, "sawatdii khrap"), "สวัสดี ครับ\n");
    }

    #[test]
    fn test_suggest_lines() {
        let mut config = ThaikeyConfig::default();
        assert_eq!(run(&config, true, " aroy "), "อร่อย\taroy\nอร่อย\taroi\n");

        config.show_weights = true;
        config.suggestion_limit = 1;
        assert_eq!(run(&config, true, "aroy"), "อร่อย\taroy\t999\n");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["thaikey", "-n", "3", "-d", "words.json", "-w", "kin"]);
        let mut config = ThaikeyConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.suggestion_limit, 3);
        assert_eq!(config.user_dictionary.as_deref(), Some("words.json"));
        assert!(config.show_weights);
        assert_eq!(cli.text, vec!["kin".to_string()]);
        assert!(!cli.save);
    }

    #[test]
    fn test_user_dictionary_extends_converter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"roman": "maew", "thai": "แมว", "weight": 300}}]"#).unwrap();
        let config = ThaikeyConfig {
            user_dictionary: Some(file.path().display().to_string()),
            ..ThaikeyConfig::default()
        };
        assert_eq!(run(&config, false, "maew"), "แมว\n");
    }

    #[test]
    fn test_missing_user_dictionary_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = ThaikeyConfig {
            user_dictionary: Some(dir.path().join("missing.json").display().to_string()),
            ..ThaikeyConfig::default()
        };
        assert!(matches!(build_converter(&config), Err(DictionaryError::IoError(_))));
    }
}
