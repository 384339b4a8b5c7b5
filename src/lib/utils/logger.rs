use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

use super::constants::error_messages;

/// [`config_logger`] The configuration for `env_logger`
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let mut builder = Builder::from_default_env();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis();

    builder.filter(None, level_filter(verbose_level)?);

    builder
        .try_init()
        .with_context(|| error_messages::LOGGER_SETUP)
}

fn level_filter(verbose_level: u8) -> Result<LevelFilter> {
    match verbose_level {
        0 => Ok(LevelFilter::Info),
        1 => Ok(LevelFilter::Debug),
        2 => Ok(LevelFilter::Trace),
        _ => Err(eyre!("ccrun maximum allowed verbosity level is: '-vv'")),
    }
}
