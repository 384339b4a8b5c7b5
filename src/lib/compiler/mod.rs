//! The core work of `ccrun`: reconcile the requested compiler configuration with the
//! compatibility catalog, and generate the shell command line that the remote service
//! will execute to build and run the source file.
pub mod arguments;
pub mod command_line;
pub mod validation;

use crate::project_model::compiler::{CompilerConfig, Language};

/// Validates `config` for `language` and synthesizes its command line
pub fn generate_command_line(config: &CompilerConfig<'_>, language: Language) -> String {
    let effective = validation::validate(config, language);
    command_line::build(&effective)
}
