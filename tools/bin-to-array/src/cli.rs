//! Command line parsing and [`Config`] construction.

use std::{ffi::OsString, path::PathBuf};

use byte_array::WrapStyle;
use clap::{Arg, ArgAction, ArgMatches, Command, builder::EnumValueParser};
use tracing::level_filters::LevelFilter;

/// Description of a single conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The path to the file whose bytes are emitted.
    pub input_path: PathBuf,
    /// The identifier of the emitted array.
    pub array_name: String,
    /// The layout of the emitted array body.
    pub wrap_style: WrapStyle,
    /// The most verbose log level written to stderr.
    pub log_level: LevelFilter,
}

/// Parses `bin-to-array`'s arguments to construct a [`Config`].
///
/// Prints a usage message and exits the process if the arguments are invalid.
pub fn get_config() -> Config {
    parse_arguments(&command_parser().get_matches())
}

/// Parses `args` to construct a [`Config`].
///
/// The first item of `args` is the program name.
///
/// # Errors
///
/// Returns a [`clap::Error`] if `args` are invalid or a required argument is missing.
pub fn try_get_config_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command_parser().try_get_matches_from(args)?;
    Ok(parse_arguments(&matches))
}

/// Parses the arguments required to produce a valid [`Config`].
pub fn parse_arguments(matches: &ArgMatches) -> Config {
    let input_path = matches
        .get_one::<PathBuf>("input_file")
        .cloned()
        .unwrap_or_else(|| unreachable!("`input_file` is a required argument"));

    let array_name = matches
        .get_one::<String>("array_name")
        .cloned()
        .unwrap_or_else(|| unreachable!("`array_name` is a required argument"));

    let wrap_style = matches
        .get_one::<LineWrap>("wrap_style")
        .copied()
        .unwrap_or_else(|| unreachable!("`wrap_style` should have a default value"));

    let log_level = if matches.get_flag("quiet") {
        LevelFilter::OFF
    } else {
        match matches.get_count("verbose") {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    Config {
        input_path,
        array_name,
        wrap_style: wrap_style.into(),
        log_level,
    }
}

/// Returns the command parser for `bin-to-array`.
pub fn command_parser() -> Command {
    let input_file = Arg::new("input_file")
        .value_name("INPUT_FILE")
        .help("File whose bytes are emitted")
        .value_parser(clap::value_parser!(PathBuf))
        .required(true);

    let array_name = Arg::new("array_name")
        .value_name("ARRAY_NAME")
        .help("Identifier of the emitted array; the length constant is named `<ARRAY_NAME>_len`")
        .required(true);

    let wrap_style = Arg::new("wrap_style")
        .long("wrap-style")
        .env("BIN_TO_ARRAY_WRAP_STYLE")
        .help("Placement of line breaks in the array body")
        .value_parser(EnumValueParser::<LineWrap>::new())
        .default_value("compact");

    let verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help("Log more details to stderr; may be repeated")
        .action(ArgAction::Count);

    let quiet = Arg::new("quiet")
        .short('q')
        .long("quiet")
        .help("Disable logging")
        .action(ArgAction::SetTrue)
        .conflicts_with("verbose");

    Command::new("bin-to-array")
        .about("Emits a file's bytes as a C constant array declaration")
        .arg(input_file)
        .arg(array_name)
        .arg(wrap_style)
        .arg(verbose)
        .arg(quiet)
        .arg_required_else_help(true)
}

/// Command line representation of a [`WrapStyle`].
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum LineWrap {
    /// [`WrapStyle::Compact`].
    #[default]
    Compact,
    /// [`WrapStyle::Legacy`].
    Legacy,
}

impl LineWrap {
    /// Returns the textual representation of the [`LineWrap`].
    pub fn as_str(&self) -> &'static str {
        WrapStyle::from(*self).as_str()
    }
}

impl From<LineWrap> for WrapStyle {
    fn from(value: LineWrap) -> Self {
        match value {
            LineWrap::Compact => Self::Compact,
            LineWrap::Legacy => Self::Legacy,
        }
    }
}

impl clap::ValueEnum for LineWrap {
    fn value_variants<'a>() -> &'a [Self] {
        static STYLES: &[LineWrap] = &[LineWrap::Compact, LineWrap::Legacy];

        STYLES
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}
