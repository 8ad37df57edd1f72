//! Command-line definition and dispatch to the text helpers.

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

/// Apply the strutil text helpers to text given after `--` or to each line of stdin
#[derive(Parser, Debug)]
#[command(name = "strutil")]
#[command(version)]
#[command(about = "Apply the strutil text helpers from the command line")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Flag values given on the command line; unset flags keep the config value
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Trim surrounding whitespace
    #[arg(long, global = true, overrides_with = "no_trim")]
    trim: bool,

    /// Keep surrounding whitespace
    #[arg(long, global = true, overrides_with = "trim")]
    no_trim: bool,

    /// Append ... to cut substrings
    #[arg(long, global = true, overrides_with = "no_ellipsis")]
    ellipsis: bool,

    /// Never append ... to cut substrings
    #[arg(long, global = true, overrides_with = "ellipsis")]
    no_ellipsis: bool,

    /// Separator used when `split` joins its parts
    #[arg(long, global = true, value_name = "GLUE")]
    glue: Option<String>,
}

impl Overrides {
    pub fn apply(&self, options: &mut Options) {
        if let Some(trim) = pick(self.trim, self.no_trim) {
            options.trim_space = trim;
        }
        if let Some(ellipsis) = pick(self.ellipsis, self.no_ellipsis) {
            options.ellipsis = ellipsis;
        }
        if let Some(ref glue) = self.glue {
            options.glue = glue.clone();
        }
    }
}

fn pick(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Settings a command runs with, after flags are applied over the config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub trim_space: bool,
    pub ellipsis: bool,
    pub glue: String,
}

impl Options {
    pub fn from_config(config: &Config) -> Self {
        Self {
            trim_space: config.trim_space,
            ellipsis: config.ellipsis,
            glue: config.glue.clone(),
        }
    }
}

/// Text given after `--`; when absent, input comes from stdin
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Words after `--`, joined with single spaces
    #[arg(last = true, value_name = "TEXT")]
    text: Vec<String>,
}

impl Input {
    pub fn text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Cut between two character positions (negative end keeps the text)
    Substring {
        start: isize,
        #[arg(allow_negative_numbers = true)]
        end: isize,
        #[command(flatten)]
        input: Input,
    },
    /// Strip phrases from the start, repeatedly and in order
    TrimPrefix {
        phrases: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Strip phrases from the end, repeatedly and in order
    TrimSuffix {
        phrases: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Strip phrases from the start, then from the end
    Trim {
        phrases: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether every character is a decimal digit
    IsNumeric {
        #[command(flatten)]
        input: Input,
    },
    /// Print whether any character takes more than one byte
    #[command(name = "is-multibyte")]
    IsMultiByte {
        #[command(flatten)]
        input: Input,
    },
    /// Space out a joined capitalized token
    Words {
        #[command(flatten)]
        input: Input,
    },
    /// Cut into lines of at most MAX bytes (ASCII only)
    Wrap {
        max: usize,
        #[command(flatten)]
        input: Input,
    },
    /// Replace up to N occurrences of each phrase (negative N replaces all)
    Replace {
        replacement: String,
        #[arg(allow_negative_numbers = true)]
        n: isize,
        phrases: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Split on a delimiter, trim the parts and join them with the glue
    Split {
        delimiter: String,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether all values are equal ignoring case
    #[command(name = "iequal")]
    IEqual { values: Vec<String> },
    /// Print whether any candidate occurs
    ContainsAny {
        candidates: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether every candidate occurs
    ContainsAll {
        candidates: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether any candidate occurs, ignoring case
    #[command(name = "icontains-any")]
    IContainsAny {
        candidates: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Print whether every candidate occurs, ignoring case
    #[command(name = "icontains-all")]
    IContainsAll {
        candidates: Vec<String>,
        #[command(flatten)]
        input: Input,
    },
    /// Print the effective config as JSON
    #[command(name = "config")]
    ShowConfig,
    /// Write the effective config to the config file
    SaveConfig,
}

impl Command {
    /// Input for text commands; `None` for commands that take no text
    pub fn input(&self) -> Option<&Input> {
        match self {
            Command::Substring { input, .. }
            | Command::TrimPrefix { input, .. }
            | Command::TrimSuffix { input, .. }
            | Command::Trim { input, .. }
            | Command::IsNumeric { input }
            | Command::IsMultiByte { input }
            | Command::Words { input }
            | Command::Wrap { input, .. }
            | Command::Replace { input, .. }
            | Command::Split { input, .. }
            | Command::ContainsAny { input, .. }
            | Command::ContainsAll { input, .. }
            | Command::IContainsAny { input, .. }
            | Command::IContainsAll { input, .. } => Some(input),
            Command::IEqual { .. } | Command::ShowConfig | Command::SaveConfig => None,
        }
    }

    /// Run the command over one line of input, producing output lines
    pub fn apply(&self, line: &str, options: &Options) -> Vec<String> {
        let trim = options.trim_space;
        match self {
            Command::Substring { start, end, .. } => {
                vec![strutil::substring(line, *start, *end, trim, options.ellipsis)]
            }
            Command::TrimPrefix { phrases, .. } => {
                vec![strutil::trim_prefix_phrases(line, trim, &as_strs(phrases))]
            }
            Command::TrimSuffix { phrases, .. } => {
                vec![strutil::trim_suffix_phrases(line, trim, &as_strs(phrases))]
            }
            Command::Trim { phrases, .. } => {
                vec![strutil::trim_phrases(line, trim, &as_strs(phrases))]
            }
            Command::IsNumeric { .. } => vec![strutil::is_numeric(line, trim).to_string()],
            Command::IsMultiByte { .. } => vec![strutil::is_multi_byte(line, trim).to_string()],
            Command::Words { .. } => vec![strutil::case_to_words(line, trim)],
            Command::Wrap { max, .. } => strutil::wrapped_ascii(line, *max),
            Command::Replace {
                replacement,
                n,
                phrases,
                ..
            } => vec![strutil::replace_all_phrases(
                line,
                replacement,
                *n,
                &as_strs(phrases),
            )],
            Command::Split { delimiter, .. } => {
                let parts = strutil::split_trim(line, delimiter);
                vec![strutil::to_csv(&parts, &options.glue)]
            }
            Command::ContainsAny { candidates, .. } => {
                vec![strutil::contains_any(line, &as_strs(candidates)).to_string()]
            }
            Command::ContainsAll { candidates, .. } => {
                vec![strutil::contains_all(line, &as_strs(candidates)).to_string()]
            }
            Command::IContainsAny { candidates, .. } => {
                vec![strutil::contains_any_ignore_case(line, &as_strs(candidates)).to_string()]
            }
            Command::IContainsAll { candidates, .. } => {
                vec![strutil::contains_all_ignore_case(line, &as_strs(candidates)).to_string()]
            }
            Command::IEqual { values } => {
                vec![strutil::is_iequal(trim, &as_strs(values)).to_string()]
            }
            Command::ShowConfig | Command::SaveConfig => Vec::new(),
        }
    }
}

fn as_strs(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}
