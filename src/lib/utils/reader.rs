use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::{eyre::eyre, Result};

use crate::{
    cli::input::CliArgs,
    config_file::RunnerConfigFile,
    project_model::{compiler::Language, Overrides},
    utils::constants::{service, CONFIG_FILE_EXT, CONFIG_FILE_NAME},
};

/// Everything that a ccrun invocation needs to know, once the configuration file and the
/// command line arguments are combined
#[derive(Debug, PartialEq, Eq)]
pub struct Settings<'a> {
    pub service_url: Cow<'a, str>,
    pub timeout: Option<Duration>,
    pub overrides: Overrides<'a>,
}

/// Looks for the configuration file of the invocation.
///
/// An explicitly requested file must exist. Otherwise, the default `ccrun.toml` under
/// *base_path* is used if present, and it's fine to not have any configuration file at all.
pub fn find_config_file(base_path: &Path, explicit: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = base_path.join(path);
        return if path.is_file() {
            Ok(Some(path))
        } else {
            Err(eyre!("The configuration file {path:?} does not exist"))
        };
    }

    let default = base_path.join(format!("{CONFIG_FILE_NAME}.{CONFIG_FILE_EXT}"));
    if default.is_file() {
        Ok(Some(default))
    } else {
        log::debug!("No configuration file found at {default:?}. Using the defaults");
        Ok(None)
    }
}

pub fn build_settings<'a>(config: RunnerConfigFile<'a>, cli_args: &'a CliArgs) -> Settings<'a> {
    let service_attr = config.service.unwrap_or_default();

    let service_url = cli_args
        .url
        .as_deref()
        .map(Cow::Borrowed)
        .or(service_attr.url)
        .unwrap_or(Cow::Borrowed(service::DEFAULT_URL));

    let file_overrides = Overrides {
        c: config.c.map(Into::into),
        cpp: config.cpp.map(Into::into),
    };

    Settings {
        service_url,
        timeout: service_attr.timeout_secs.map(Duration::from_secs),
        overrides: file_overrides.merge(assemble_cli_overrides(cli_args)),
    }
}

fn assemble_cli_overrides(cli_args: &CliArgs) -> Overrides<'_> {
    let mut overrides = Overrides::default();

    let language = cli_args.command.language();
    let config = cli_args
        .command
        .overrides()
        .map(|args| args.as_config())
        .filter(|config| !config.is_empty());

    match language {
        Some(Language::C) => overrides.c = config,
        Some(Language::Cpp) => overrides.cpp = config,
        None => {}
    }

    overrides
}
