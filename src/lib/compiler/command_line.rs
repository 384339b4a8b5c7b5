//! Synthesis of the shell command line that compiles and runs the user's source file
//! on the remote service.

use crate::{
    catalog,
    compiler::arguments::{Argument, Arguments},
    project_model::compiler::EffectiveConfig,
    utils::constants::{trailers, SOURCE_FILE},
};

/// How the output of the compiler and of the produced binary are presented
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    /// Every line is prefixed to tell apart diagnostics from program output,
    /// and the binary runs whenever it exists
    AlwaysShow,
    /// The binary runs only if the compilation succeeded
    RunOnSuccess,
}

impl OutputFormat {
    pub fn for_config(config: &EffectiveConfig<'_>) -> Self {
        if config.always_show_compiler_output {
            OutputFormat::AlwaysShow
        } else {
            OutputFormat::RunOnSuccess
        }
    }

    pub fn trailer(&self) -> &'static str {
        match *self {
            OutputFormat::AlwaysShow => trailers::ALWAYS_SHOW,
            OutputFormat::RunOnSuccess => trailers::DEFAULT,
        }
    }
}

/// Assembles the compiler invocation, in the order that the driver expects its arguments
pub fn compiler_arguments<'a>(config: &'a EffectiveConfig<'a>) -> Arguments<'a> {
    let language = config.language;
    let mut args = Arguments::with_capacity(10);

    args.push(&*config.compiler);
    args.push(language.language_flag());
    args.push(config.language_level());
    args.push_opt(stdlib_arg(config));
    args.push(config.optimization.as_arg());
    args.push(&*config.flags);
    args.push(SOURCE_FILE);
    args.push(&*config.libraries);
    args.push(catalog::extra_libraries(
        &config.compiler,
        &config.standard,
        language,
    ));

    args
}

/// The alternative standard library flag, only for the clang C++ driver when requested
fn stdlib_arg<'a>(config: &EffectiveConfig<'_>) -> Option<Argument<'a>> {
    if config.use_std_lib && config.compiler == catalog::CLANG_CPP_DRIVER {
        catalog::stdlib_flag(&config.compiler).map(Argument::from)
    } else {
        None
    }
}

/// Builds the full shell command line for `config`.
///
/// The result only depends on `config`, so the same configuration always produces the same
/// command.
pub fn build(config: &EffectiveConfig<'_>) -> String {
    let compile = compiler_arguments(config).join();
    let trailer = OutputFormat::for_config(config).trailer();

    let mut command = format!("{compile} {trailer}");
    if !config.extra_commands.trim().is_empty() {
        command.push_str(trailers::STATEMENT_SEPARATOR);
        command.push(' ');
        command.push_str(config.extra_commands.trim());
    }

    log::debug!("Generated command line for {}: {command}", config.language);
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        compiler::validation::validate,
        project_model::compiler::{CompilerConfig, Language},
        utils::constants::COMMON_FLAGS,
    };

    fn effective<'a>(language: Language, overrides: CompilerConfig<'a>) -> EffectiveConfig<'a> {
        validate(
            &CompilerConfig::language_default(language).merge(overrides),
            language,
        )
    }

    #[test]
    fn test_c_defaults() {
        let command = build(&effective(Language::C, CompilerConfig::default()));

        assert_eq!(
            command,
            format!(
                "g++ -x c -std=c2x -O2 {COMMON_FLAGS} main.cpp -lm -latomic -latomic {}",
                trailers::ALWAYS_SHOW
            )
        );
        assert!(command.ends_with(trailers::ALWAYS_SHOW));
    }

    #[test]
    fn test_cpp_defaults() {
        let command = build(&effective(Language::Cpp, CompilerConfig::default()));

        assert_eq!(
            command,
            format!("g++ -std=c++20 -O2 {COMMON_FLAGS} main.cpp -lm -latomic -latomic && ./a.out")
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = effective(
            Language::Cpp,
            CompilerConfig {
                compiler: Some("clang++".into()),
                standard: Some("c++14".into()),
                extra_commands: Some("ls -la".into()),
                use_std_lib: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(build(&config), build(&config));
        assert_eq!(build(&config), build(&config.clone()));
    }

    #[test]
    fn test_stdlib_flag_iff_clang_cpp_and_requested() {
        for language in Language::ALL {
            for compiler in catalog::supported_compilers(language) {
                for use_std_lib in [false, true] {
                    let config = effective(
                        language,
                        CompilerConfig {
                            compiler: Some(compiler.into()),
                            use_std_lib: Some(use_std_lib),
                            ..Default::default()
                        },
                    );
                    let command = build(&config);
                    let expected = use_std_lib && compiler == "clang++";

                    assert_eq!(
                        command.contains("-stdlib=libc++"),
                        expected,
                        "{language} {compiler} {use_std_lib}: {command}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_clang_cpp_with_stdlib_and_extra_libraries() {
        let config = effective(
            Language::Cpp,
            CompilerConfig {
                compiler: Some("clang++".into()),
                standard: Some("c++17".into()),
                optimization: Some("O0".into()),
                flags: Some("-g".into()),
                libraries: Some("-lpthread".into()),
                use_std_lib: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(
            build(&config),
            "clang++ -std=c++17 -stdlib=libc++ -O0 -g main.cpp -lpthread -latomic -lsupc++ && ./a.out"
        );
    }

    #[test]
    fn test_empty_components_are_dropped() {
        let config = effective(
            Language::C,
            CompilerConfig {
                compiler: Some("clang".into()),
                standard: Some("c89".into()),
                flags: Some("".into()),
                libraries: Some("".into()),
                always_show_compiler_output: Some(false),
                ..Default::default()
            },
        );

        assert_eq!(build(&config), "clang -x c -std=c89 -O2 main.cpp && ./a.out");
    }

    #[test]
    fn test_extra_commands_run_after_a_statement_separator() {
        let config = effective(
            Language::Cpp,
            CompilerConfig {
                extra_commands: Some("echo finished".into()),
                ..Default::default()
            },
        );
        let command = build(&config);

        assert!(command.ends_with("&& ./a.out; echo finished"));

        let config = effective(
            Language::C,
            CompilerConfig {
                extra_commands: Some("  ".into()),
                ..Default::default()
            },
        );
        assert!(build(&config).ends_with(trailers::ALWAYS_SHOW));
    }

    #[test]
    fn test_unset_libraries_link_the_math_library() {
        let config = validate(
            &CompilerConfig {
                compiler: Some("g++".into()),
                standard: Some("c89".into()),
                ..Default::default()
            },
            Language::C,
        );

        assert_eq!(
            compiler_arguments(&config).join(),
            "g++ -x c -std=c89 -O2 main.cpp -lm"
        );
    }
}
