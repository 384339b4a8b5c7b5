//! Reconciles a user supplied [`CompilerConfig`] with the [`crate::catalog`].
//!
//! Validation never fails. Every value that the catalog doesn't support is replaced by the
//! language default, and the replacement is reported as a [`ConfigDrift`] and logged as a
//! warning.

use core::fmt;
use std::borrow::Cow;

use crate::{
    catalog,
    project_model::compiler::{CompilerConfig, EffectiveConfig, Language, OptimizationLevel},
    utils::constants::{defaults, COMMON_LIBRARIES},
};

/// A value of a [`CompilerConfig`] that had to be replaced by a default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigDrift {
    UnsupportedCompiler {
        language: Language,
        requested: String,
        replacement: &'static str,
    },
    UnsupportedStandard {
        compiler: String,
        requested: String,
        replacement: &'static str,
    },
    UnknownOptimization {
        requested: String,
        replacement: OptimizationLevel,
    },
}

impl fmt::Display for ConfigDrift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigDrift::UnsupportedCompiler {
                language,
                requested,
                replacement,
            } => write!(
                f,
                "Compiler '{requested}' is not supported for {language}. Supported compilers: {}. Using '{replacement}'",
                catalog::supported_compilers(*language).join(", ")
            ),
            ConfigDrift::UnsupportedStandard {
                compiler,
                requested,
                replacement,
            } => write!(
                f,
                "Standard '{requested}' is not supported by '{compiler}'. Using '{replacement}'"
            ),
            ConfigDrift::UnknownOptimization {
                requested,
                replacement,
            } => write!(
                f,
                "Unknown optimization level '{requested}'. Using '{replacement}'"
            ),
        }
    }
}

/// Resolves `config` into an [`EffectiveConfig`] for `language`, logging every drift
pub fn validate<'a>(config: &CompilerConfig<'a>, language: Language) -> EffectiveConfig<'a> {
    validate_with_report(config, language).0
}

/// Same as [`validate`], but also hands back the drifts found while resolving the config
pub fn validate_with_report<'a>(
    config: &CompilerConfig<'a>,
    language: Language,
) -> (EffectiveConfig<'a>, Vec<ConfigDrift>) {
    let mut drifts = Vec::new();

    let compiler = resolve_compiler(config.compiler.as_ref(), language, &mut drifts);
    let standard = resolve_standard(config.standard.as_ref(), &compiler, language, &mut drifts);
    let optimization = resolve_optimization(config.optimization.as_deref(), &mut drifts);

    drifts.iter().for_each(|drift| log::warn!("{drift}"));

    let effective = EffectiveConfig {
        language,
        compiler,
        standard,
        optimization,
        flags: config.flags.clone().unwrap_or_default(),
        libraries: config
            .libraries
            .clone()
            .unwrap_or(Cow::Borrowed(COMMON_LIBRARIES)),
        extra_commands: config.extra_commands.clone().unwrap_or_default(),
        always_show_compiler_output: config.always_show_compiler_output.unwrap_or_default(),
        use_std_lib: config.use_std_lib.unwrap_or_default(),
    };

    (effective, drifts)
}

fn resolve_compiler<'a>(
    requested: Option<&Cow<'a, str>>,
    language: Language,
    drifts: &mut Vec<ConfigDrift>,
) -> Cow<'a, str> {
    match requested {
        Some(compiler) if catalog::is_supported_compiler(compiler, language) => compiler.clone(),
        Some(compiler) => {
            drifts.push(ConfigDrift::UnsupportedCompiler {
                language,
                requested: compiler.to_string(),
                replacement: language.default_compiler(),
            });
            Cow::Borrowed(language.default_compiler())
        }
        None => Cow::Borrowed(language.default_compiler()),
    }
}

fn resolve_standard<'a>(
    requested: Option<&Cow<'a, str>>,
    compiler: &str,
    language: Language,
    drifts: &mut Vec<ConfigDrift>,
) -> Cow<'a, str> {
    let supported = catalog::supported_standards(compiler, language);

    match requested {
        Some(standard) if supported.contains(&&**standard) => standard.clone(),
        Some(standard) => {
            drifts.push(ConfigDrift::UnsupportedStandard {
                compiler: compiler.to_string(),
                requested: standard.to_string(),
                replacement: language.default_standard(),
            });
            Cow::Borrowed(language.default_standard())
        }
        None => Cow::Borrowed(language.default_standard()),
    }
}

fn resolve_optimization(
    requested: Option<&str>,
    drifts: &mut Vec<ConfigDrift>,
) -> OptimizationLevel {
    match requested {
        Some(token) => OptimizationLevel::from_token(token).unwrap_or_else(|| {
            drifts.push(ConfigDrift::UnknownOptimization {
                requested: token.to_string(),
                replacement: defaults::OPTIMIZATION,
            });
            defaults::OPTIMIZATION
        }),
        None => defaults::OPTIMIZATION,
    }
}
