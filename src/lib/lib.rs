pub mod catalog;
pub mod cli;
pub mod compiler;
pub mod config_file;
pub mod project_model;
pub mod runner;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::{fs, io::Write, path::Path, time::Instant};

    use color_eyre::{
        eyre::{eyre, Context},
        Result,
    };

    use crate::{
        cli::{
            input::{CliArgs, Command},
            output,
        },
        compiler, config_file,
        project_model::compiler::Language,
        runner::{
            service::{ExecutionService, HttpExecutionService},
            CodeRunner, RunContext,
        },
        utils::{
            constants::error_messages,
            reader::{self, Settings},
        },
    };

    /// The main work of the project. Runs the tasks
    /// inputted in the CLI against the HTTP execution service
    pub fn run_ccrun(cli_args: &CliArgs, base_path: &Path) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        run_ccrun_with(
            cli_args,
            base_path,
            |settings| {
                HttpExecutionService::with_timeout(settings.service_url.to_string(), settings.timeout)
            },
            &mut out,
        )
    }

    /// Same as [`run_ccrun`], but the [`ExecutionService`] is built by *make_service* and
    /// the results are written on *out*
    pub fn run_ccrun_with<S, F, W>(
        cli_args: &CliArgs,
        base_path: &Path,
        make_service: F,
        out: &mut W,
    ) -> Result<()>
    where
        S: ExecutionService,
        F: FnOnce(&Settings<'_>) -> S,
        W: Write,
    {
        let raw_file = match reader::find_config_file(base_path, cli_args.config.as_deref())? {
            Some(cfg_path) => {
                log::debug!("Loading the configuration file: {:?}", cfg_path);
                fs::read_to_string(&cfg_path)
                    .with_context(|| format!("{}: {:?}", error_messages::READ_CFG_FILE, cfg_path))?
            }
            None => String::new(),
        };

        let config = config_file::runner_cfg_from_file(&raw_file)
            .with_context(|| error_messages::PARSE_CFG_FILE)?;
        let settings = reader::build_settings(config, cli_args);

        match &cli_args.command {
            Command::Catalog { language } => {
                let languages = match language {
                    Some(language) => vec![Language::from(*language)],
                    None => Language::ALL.to_vec(),
                };
                for language in languages {
                    output::write_catalog(&mut *out, language)?;
                }
                Ok(())
            }
            Command::Command { language, .. } => {
                let language = Language::from(*language);
                let config = settings.overrides.resolve(language);
                let command_line = compiler::generate_command_line(&config, language);
                output::write_text(out, &command_line)
            }
            Command::Run { language, file, .. } => {
                let source_path = base_path.join(file);
                let source_code = fs::read_to_string(&source_path).with_context(|| {
                    format!("{}: {:?}", error_messages::READ_SOURCE_FILE, source_path)
                })?;

                let runner = CodeRunner::new(make_service(&settings));
                let context = RunContext::new(settings.overrides.clone());

                let run_ts = Instant::now();
                let run_output = runner.run(&source_code, Language::from(*language), &context);
                log::debug!(
                    "The remote run took a total of {:?} ms",
                    run_ts.elapsed().as_millis()
                );

                if run_output.is_error() {
                    return Err(eyre!("{}: {}", error_messages::FAILED_RUN, run_output.text));
                }
                output::write_text(out, &run_output.text)
            }
        }
    }

}
