//! The command line interface of ccrun
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::project_model::compiler::{CompilerConfig, Language};

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use ccrun::cli::input::{CliArgs, Command, LanguageArg};
///
/// let parser = CliArgs::parse_from(["", "-v", "command", "cpp"]);
/// assert_eq!(1, parser.verbose);
/// assert!(matches!(parser.command, Command::Command { language: LanguageArg::Cpp, .. }));
///
/// let parser = CliArgs::parse_from(["", "--url", "http://localhost/compile", "run", "c", "main.c"]);
/// assert_eq!(parser.url.as_deref(), Some("http://localhost/compile"));
///
/// let parser = CliArgs::parse_from(["", "catalog"]);
/// assert_eq!(parser.command, Command::Catalog { language: None });
/// ```
#[derive(Parser, Debug)]
#[command(name = "ccrun")]
#[command(author = "Zero Day Code")]
#[command(version = "0.3.0")]
#[command(
    about = "ccrun compiles and runs C and C++ snippets on a remote execution service",
    long_about = "ccrun validates the requested compiler configuration, generates the shell command line \
    that builds and runs the snippet and sends both to a remote compile-and-run service"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, help="ccrun maximum allowed verbosity level is: '-vv'")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "Path of the configuration file. Defaults to ./ccrun.toml when it exists"
    )]
    pub config: Option<String>,

    #[arg(long, help = "The URL of the compile-and-run service")]
    pub url: Option<String>,
}

/// [`Command`] -  The core enum commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compiles and runs a source file on the remote service
    Run {
        language: LanguageArg,
        file: PathBuf,
        #[command(flatten)]
        overrides: CompilerArgs,
    },
    /// Prints the command line that a run would send, without sending it
    Command {
        language: LanguageArg,
        #[command(flatten)]
        overrides: CompilerArgs,
    },
    /// Prints the supported compilers and standards
    Catalog { language: Option<LanguageArg> },
}

impl Command {
    pub fn language(&self) -> Option<Language> {
        match self {
            Command::Run { language, .. } | Command::Command { language, .. } => {
                Some((*language).into())
            }
            Command::Catalog { language } => language.map(Language::from),
        }
    }

    pub fn overrides(&self) -> Option<&CompilerArgs> {
        match self {
            Command::Run { overrides, .. } | Command::Command { overrides, .. } => Some(overrides),
            Command::Catalog { .. } => None,
        }
    }
}

/// [`LanguageArg`] The languages available as a command line argument
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LanguageArg {
    C,
    #[value(alias = "c++")]
    Cpp,
}

impl From<LanguageArg> for Language {
    fn from(value: LanguageArg) -> Self {
        match value {
            LanguageArg::C => Language::C,
            LanguageArg::Cpp => Language::Cpp,
        }
    }
}

/// Overrides of the compiler configuration, that win over the configuration file
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct CompilerArgs {
    #[arg(long, help = "The compiler driver")]
    pub compiler: Option<String>,
    #[arg(long = "std", help = "The language standard, ie: c11, c++17")]
    pub standard: Option<String>,
    #[arg(short = 'O', long, help = "The optimization level, ie: O2, Ofast")]
    pub optimization: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Extra compiler flags")]
    pub flags: Option<String>,
    #[arg(long = "libs", allow_hyphen_values = true, help = "Libraries to link")]
    pub libraries: Option<String>,
    #[arg(
        long = "extra",
        allow_hyphen_values = true,
        help = "Shell commands executed after the program"
    )]
    pub extra_commands: Option<String>,
    #[arg(
        long,
        overrides_with = "no_show_compiler_output",
        help = "Always show the compiler output"
    )]
    pub show_compiler_output: bool,
    #[arg(
        long,
        overrides_with = "show_compiler_output",
        help = "Show the compiler output only when the compilation fails"
    )]
    pub no_show_compiler_output: bool,
    #[arg(
        long,
        overrides_with = "no_use_std_lib",
        help = "Link clang++ against its own standard library"
    )]
    pub use_std_lib: bool,
    #[arg(long, overrides_with = "use_std_lib", help = "Link against the default standard library")]
    pub no_use_std_lib: bool,
}

/// A `--flag`/`--no-flag` pair. None of them means that the choice is left to the configuration
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CompilerArgs {
    pub fn as_config(&self) -> CompilerConfig<'_> {
        CompilerConfig {
            compiler: self.compiler.as_deref().map(Into::into),
            standard: self.standard.as_deref().map(Into::into),
            optimization: self.optimization.as_deref().map(Into::into),
            flags: self.flags.as_deref().map(Into::into),
            libraries: self.libraries.as_deref().map(Into::into),
            extra_commands: self.extra_commands.as_deref().map(Into::into),
            always_show_compiler_output: switch(
                self.show_compiler_output,
                self.no_show_compiler_output,
            ),
            use_std_lib: switch(self.use_std_lib, self.no_use_std_lib),
        }
    }
}
