use core::fmt;
use std::borrow::Cow;

use crate::utils::constants::{defaults, COMMON_FLAGS};

/// The languages that the remote service knows how to build and run
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::C, Language::Cpp];

    /// The compiler identifier that replaces an unsupported one
    pub fn default_compiler(&self) -> &'static str {
        // Both paths go through the C++ driver, C sources being forced
        // with `-x c` (see [`Language::language_flag`])
        match *self {
            Language::C | Language::Cpp => "g++",
        }
    }

    pub fn default_standard(&self) -> &'static str {
        match *self {
            Language::C => "c2x",
            Language::Cpp => "c++20",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Language::C => "c",
            Language::Cpp => "cpp",
        }
    }

    /// Flag that forces the compiler driver to treat the source file as written in `self`
    pub fn language_flag(&self) -> &'static str {
        match *self {
            Language::C => "-x c",
            Language::Cpp => "",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[derive(Default, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OptimizationLevel {
    O0,
    O1,
    #[default]
    O2,
    O3,
    Os,
    Og,
    Ofast,
}

impl OptimizationLevel {
    pub const ALL: [OptimizationLevel; 7] = [
        OptimizationLevel::O0,
        OptimizationLevel::O1,
        OptimizationLevel::O2,
        OptimizationLevel::O3,
        OptimizationLevel::Os,
        OptimizationLevel::Og,
        OptimizationLevel::Ofast,
    ];

    /// Recognizes the level tokens exactly as they are written after the dash of
    /// the compiler flag (`O2`, `Ofast`...). Anything else is not a level.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == token)
    }

    pub fn as_arg(&self) -> String {
        format!("-{self}")
    }
}

impl fmt::Display for OptimizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for OptimizationLevel {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl OptimizationLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            OptimizationLevel::O0 => "O0",
            OptimizationLevel::O1 => "O1",
            OptimizationLevel::O2 => "O2",
            OptimizationLevel::O3 => "O3",
            OptimizationLevel::Os => "Os",
            OptimizationLevel::Og => "Og",
            OptimizationLevel::Ofast => "Ofast",
        }
    }
}

/// A partial, user supplied, compiler configuration.
///
/// Every field is optional so the same type represents the language defaults, the overrides
/// coming from the configuration file and the ones coming from the command line. The values of
/// `compiler`, `standard` and `optimization` aren't checked here, that is the job of
/// [`crate::compiler::validation::validate`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompilerConfig<'a> {
    pub compiler: Option<Cow<'a, str>>,
    pub standard: Option<Cow<'a, str>>,
    pub optimization: Option<Cow<'a, str>>,
    pub flags: Option<Cow<'a, str>>,
    pub libraries: Option<Cow<'a, str>>,
    pub extra_commands: Option<Cow<'a, str>>,
    pub always_show_compiler_output: Option<bool>,
    pub use_std_lib: Option<bool>,
}

impl<'a> CompilerConfig<'a> {
    /// The configuration that every run of `language` starts from
    pub fn language_default(language: Language) -> CompilerConfig<'static> {
        CompilerConfig {
            compiler: Some(Cow::Borrowed(language.default_compiler())),
            standard: Some(Cow::Borrowed(language.default_standard())),
            optimization: Some(Cow::Borrowed(defaults::OPTIMIZATION.as_str())),
            flags: Some(Cow::Borrowed(COMMON_FLAGS)),
            libraries: Some(Cow::Borrowed(defaults::LIBRARIES)),
            extra_commands: Some(Cow::Borrowed("")),
            always_show_compiler_output: Some(matches!(language, Language::C)),
            use_std_lib: Some(false),
        }
    }

    /// Field-wise merge where the values present in `overrides` win over the ones in `self`
    pub fn merge(self, overrides: CompilerConfig<'a>) -> CompilerConfig<'a> {
        CompilerConfig {
            compiler: overrides.compiler.or(self.compiler),
            standard: overrides.standard.or(self.standard),
            optimization: overrides.optimization.or(self.optimization),
            flags: overrides.flags.or(self.flags),
            libraries: overrides.libraries.or(self.libraries),
            extra_commands: overrides.extra_commands.or(self.extra_commands),
            always_show_compiler_output: overrides
                .always_show_compiler_output
                .or(self.always_show_compiler_output),
            use_std_lib: overrides.use_std_lib.or(self.use_std_lib),
        }
    }

    /// True if no field carries a value
    pub fn is_empty(&self) -> bool {
        self == &CompilerConfig::default()
    }
}

/// A [`CompilerConfig`] after validation, with every field resolved to a concrete value.
///
/// Only [`crate::compiler::validation`] builds this type, so `compiler` is always one of the
/// supported compilers for the language and `optimization` one of the known levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig<'a> {
    pub language: Language,
    pub compiler: Cow<'a, str>,
    pub standard: Cow<'a, str>,
    pub optimization: OptimizationLevel,
    pub flags: Cow<'a, str>,
    pub libraries: Cow<'a, str>,
    pub extra_commands: Cow<'a, str>,
    pub always_show_compiler_output: bool,
    pub use_std_lib: bool,
}

impl<'a> EffectiveConfig<'a> {
    pub fn language_level(&self) -> String {
        format!("-std={}", self.standard)
    }
}
