//! file for represent the available configuration properties within ccrun
//! for setting up the compiler used for one language
use serde::*;
use std::borrow::Cow;

use crate::project_model::compiler::CompilerConfig;

/// [`CompilerAttribute`] - Overrides of the compiler defaults for one language
///
/// * `compiler` - The compiler driver, one of the supported for the language
/// * `standard` - The language standard, one of the supported by the compiler
/// * `optimization` - One of `O0`, `O1`, `O2`, `O3`, `Os`, `Og` or `Ofast`
/// * `flags` - Extra flags, passed verbatim to the compiler
/// * `libraries` - Libraries to link, passed verbatim after the source file
/// * `extra_commands` - Shell commands executed after the program
/// * `always_show_compiler_output` - Whether the compiler output is always shown,
/// prefixed to tell it apart from the program output
/// * `use_std_lib` - Whether `clang++` uses its own standard library
///
/// Compiler, standard and optimization aren't validated while parsing. Unsupported
/// values are replaced later by the language defaults.
///
/// ### Tests
///
/// ```rust
/// use ccrun::config_file::compiler::CompilerAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[cpp]
///     compiler = 'clang++'
///     standard = 'c++14'
///     optimization = 'Os'
///     flags = '-g -fsanitize=address'
///     libraries = '-lm'
///     alwaysShowCompilerOutput = true
///"#;
///
/// let config: CompilerAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the ccrun toml file");
///
/// assert_eq!(config.compiler.as_deref(), Some("clang++"));
/// assert_eq!(config.standard.as_deref(), Some("c++14"));
/// assert_eq!(config.optimization.as_deref(), Some("Os"));
/// assert_eq!(config.flags.as_deref(), Some("-g -fsanitize=address"));
/// assert_eq!(config.always_show_compiler_output, Some(true));
/// assert_eq!(config.use_std_lib, None);
/// ```
///
/// > Note: TOML table are toml commented (#) to allow us to parse
/// the inner attributes as the direct type that they belongs to.
#[derive(Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct CompilerAttribute<'a> {
    #[serde(borrow)]
    pub compiler: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub standard: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub optimization: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub flags: Option<Cow<'a, str>>,
    #[serde(borrow)]
    pub libraries: Option<Cow<'a, str>>,
    #[serde(borrow, alias = "extraCommands")]
    pub extra_commands: Option<Cow<'a, str>>,
    #[serde(alias = "alwaysShowCompilerOutput")]
    pub always_show_compiler_output: Option<bool>,
    #[serde(alias = "useStdLib")]
    pub use_std_lib: Option<bool>,
}

impl<'a> From<CompilerAttribute<'a>> for CompilerConfig<'a> {
    fn from(attr: CompilerAttribute<'a>) -> Self {
        CompilerConfig {
            compiler: attr.compiler,
            standard: attr.standard,
            optimization: attr.optimization,
            flags: attr.flags,
            libraries: attr.libraries,
            extra_commands: attr.extra_commands,
            always_show_compiler_output: attr.always_show_compiler_output,
            use_std_lib: attr.use_std_lib,
        }
    }
}
