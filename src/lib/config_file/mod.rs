//! root file for the crate where the datastructures that holds the TOML
//! parsed data lives.
pub mod compiler;
pub mod service;

use serde::Deserialize;

use self::{compiler::CompilerAttribute, service::ServiceAttribute};

/// ```rust
/// use ccrun::config_file::{self, RunnerConfigFile};
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     [service]
///     url = 'http://localhost:8080/compile'
///
///     [c]
///     compiler = 'clang'
///     standard = 'c89'
///
///     [cpp]
///     compiler = 'clang++'
///     standard = 'c++17'
///     optimization = 'O3'
///     useStdLib = true
///     extra_commands = 'ls -l'
/// "#;
///
/// let config: RunnerConfigFile = config_file::runner_cfg_from_file(CONFIG_FILE_MOCK)
///     .expect("A failure happened parsing the ccrun toml file");
///
/// let service = config.service.as_ref().expect("The service attribute is missing");
/// assert_eq!(service.url.as_deref(), Some("http://localhost:8080/compile"));
///
/// let c = config.c.as_ref().expect("The c attribute is missing");
/// assert_eq!(c.compiler.as_deref(), Some("clang"));
/// assert_eq!(c.standard.as_deref(), Some("c89"));
/// assert_eq!(c.optimization, None);
///
/// let cpp = config.cpp.as_ref().expect("The cpp attribute is missing");
/// assert_eq!(cpp.compiler.as_deref(), Some("clang++"));
/// assert_eq!(cpp.optimization.as_deref(), Some("O3"));
/// assert_eq!(cpp.use_std_lib, Some(true));
/// assert_eq!(cpp.extra_commands.as_deref(), Some("ls -l"));
/// ```
/// The [`RunnerConfigFile`] is the type that holds
/// the whole hierarchy of ccrun config file attributes
/// and properties
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfigFile<'a> {
    #[serde(borrow)]
    pub service: Option<ServiceAttribute<'a>>,
    #[serde(borrow)]
    pub c: Option<CompilerAttribute<'a>>,
    #[serde(borrow, alias = "c++")]
    pub cpp: Option<CompilerAttribute<'a>>,
}

pub fn runner_cfg_from_file(cfg: &'_ str) -> Result<RunnerConfigFile<'_>, toml::de::Error> {
    <RunnerConfigFile>::deserialize(&mut toml::Deserializer::new(cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_file() {
        let config = runner_cfg_from_file("").unwrap();
        assert_eq!(config, RunnerConfigFile::default());
    }

    #[test]
    fn test_unknown_attributes_are_rejected() {
        assert!(runner_cfg_from_file("[rust]\ncompiler = 'rustc'").is_err());
        assert!(runner_cfg_from_file("[cpp]\ncompilr = 'g++'").is_err());
    }

    #[test]
    fn test_escaped_strings_are_owned() {
        let config = runner_cfg_from_file("[cpp]\nflags = \"-DNAME=\\\"ccrun\\\"\"").unwrap();
        assert_eq!(
            config.cpp.unwrap().flags.as_deref(),
            Some("-DNAME=\"ccrun\"")
        );
    }
}
