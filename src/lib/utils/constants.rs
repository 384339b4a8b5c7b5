//! Constant value definitions to use across the whole program

/// Warnings and diagnostic flags added to every compilation
pub const COMMON_FLAGS: &str = "-Wall -Wextra -pedantic -pthread -pedantic-errors";
/// The minimal set of libraries linked when the user doesn't provide any
pub const COMMON_LIBRARIES: &str = "-lm";

/// The name of the translation unit written by the remote service
pub const SOURCE_FILE: &str = "main.cpp";

pub mod defaults {
    use crate::project_model::compiler::OptimizationLevel;

    pub const OPTIMIZATION: OptimizationLevel = OptimizationLevel::O2;
    /// Libraries of the language defaults, that extend [`super::COMMON_LIBRARIES`]
    pub const LIBRARIES: &str = "-lm -latomic";
}

/// The shell fragments appended after the compiler invocation
pub mod trailers {
    /// Prefixes every compiler line with `☘` and every program line with `☢`, and runs the
    /// binary only if the compilation produced it
    pub const ALWAYS_SHOW: &str =
        r#"2>&1 | sed "s/^/☘ /"; if [ -x a.out ]; then ./a.out | sed "s/^/☢ /"; fi"#;
    pub const DEFAULT: &str = "&& ./a.out";
    pub const STATEMENT_SEPARATOR: &str = ";";
}

pub mod service {
    pub const DEFAULT_URL: &str = "http://coliru.stacked-crooked.com/compile";
    /// Rendering hint attached to the service output, which may carry ANSI escapes
    pub const ANSI_HIGHLIGHT: &str = "ansi";
}

pub mod debug_messages {
    pub const MERGING_CONFIGURATION: &str =
        "Merging the language defaults with the provided overrides";
}

pub mod error_messages {
    pub const READ_CFG_FILE: &str = "Could not read the configuration file";
    pub const PARSE_CFG_FILE: &str = "Could not parse the configuration file";
    pub const READ_SOURCE_FILE: &str = "Could not read the source file";
    pub const SERVICE_REQUEST: &str = "The request to the execution service failed";
    pub const SERVICE_RESPONSE_BODY: &str =
        "Unable to read the response body of the execution service";
    pub const FAILED_RUN: &str = "The remote run ended with an error";
    pub const WRITE_OUTPUT: &str = "Failed to write the output";
    pub const LOGGER_SETUP: &str = "ccrun wasn't unable to set up the logger";
}

pub const CONFIG_FILE_NAME: &str = "ccrun";
pub const CONFIG_FILE_EXT: &str = "toml";
