use std::cell::RefCell;

use ccrun::{
    cli::input::CliArgs,
    project_model::{compiler::Language, Overrides},
    runner::{
        registry::code_runners,
        service::{ExecutionRequest, ExecutionService, HttpExecutionService},
        CodeRunner, RunContext,
    },
    utils::constants::{trailers, COMMON_FLAGS},
    worker::run_ccrun_with,
};
use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use tempfile::tempdir;

/// Answers every request with a canned result and remembers the last request
struct FakeService {
    answer: std::result::Result<&'static str, &'static str>,
    last: RefCell<Option<ExecutionRequest>>,
}

impl FakeService {
    fn answering(answer: std::result::Result<&'static str, &'static str>) -> Self {
        Self {
            answer,
            last: RefCell::new(None),
        }
    }

    fn last_command(&self) -> String {
        self.last
            .borrow()
            .as_ref()
            .map(|request| request.cmd.clone())
            .unwrap_or_default()
    }
}

impl ExecutionService for FakeService {
    fn submit(&self, request: &ExecutionRequest) -> Result<String> {
        self.last.replace(Some(request.clone()));
        self.answer.map(String::from).map_err(|msg| eyre!(msg))
    }
}

#[test]
fn test_c_without_overrides() {
    let service = FakeService::answering(Ok("☢ hello"));
    let runner = CodeRunner::new(&service);

    let runners = code_runners::<&FakeService>();

    let output = runners["c"](&runner, "int main(void) {}", &RunContext::default());

    assert_eq!(output.text, "☢ hello");
    assert_eq!(output.highlight_lang, Some("ansi"));
    let command = service.last_command();
    assert!(command.starts_with(&format!(
        "g++ -x c -std=c2x -O2 {COMMON_FLAGS} main.cpp -lm -latomic"
    )));
    assert!(command.ends_with(trailers::ALWAYS_SHOW));
}

#[test]
fn test_cpp_without_overrides() {
    let service = FakeService::answering(Ok(""));
    let runner = CodeRunner::new(&service);

    runner.run("int main() {}", Language::Cpp, &RunContext::default());

    let command = service.last_command();
    assert!(command.starts_with(&format!(
        "g++ -std=c++20 -O2 {COMMON_FLAGS} main.cpp -lm -latomic"
    )));
    assert!(command.ends_with("&& ./a.out"));
    assert!(!command.contains("sed"));
}

#[test]
fn test_clang_cpp_with_an_unsupported_standard() {
    let service = FakeService::answering(Ok(""));
    let runner = CodeRunner::new(&service);
    let context = RunContext::new(Overrides {
        cpp: Some(ccrun::project_model::compiler::CompilerConfig {
            compiler: Some("clang++".into()),
            standard: Some("c++23".into()),
            ..Default::default()
        }),
        ..Default::default()
    });

    runner.run("int main() {}", Language::Cpp, &context);

    assert!(service.last_command().starts_with("clang++ -std=c++20 -O2"));
}

#[test]
fn test_network_error() {
    let service = FakeService::answering(Err("connection refused"));
    let runner = CodeRunner::new(&service);

    let output = runner.run("int main() {}", Language::Cpp, &RunContext::default());

    assert!(output.is_error());
    assert!(output.text.contains("connection refused"));
    assert!(!runner.is_running());
}

#[test]
fn test_unreachable_http_service() {
    let runner = CodeRunner::new(HttpExecutionService::new("http://127.0.0.1:9/compile"));

    let output = runner.run("int main() {}", Language::C, &RunContext::default());

    assert!(output.is_error());
    assert!(!output.text.is_empty());
    assert!(!runner.is_running());
}

#[test]
fn test_full_program_with_a_config_file() -> Result<()> {
    let temp = tempdir()?;
    std::fs::write(
        temp.path().join("ccrun.toml"),
        r#"
            [service]
            url = 'http://localhost:9999/compile'

            [cpp]
            compiler = 'g++-5.2'
            standard = 'c++1z'
            optimization = 'O1'
            extraCommands = 'echo done'
        "#,
    )?;
    std::fs::write(temp.path().join("main.cpp"), "int main() { return 0; }")?;

    let service = FakeService::answering(Ok("☢ done\n"));
    let mut seen_url = String::new();
    let mut out = Vec::new();

    run_ccrun_with(
        &CliArgs::parse_from(["", "run", "cpp", "main.cpp"]),
        temp.path(),
        |settings| {
            seen_url = settings.service_url.to_string();
            &service
        },
        &mut out,
    )?;

    assert_eq!(seen_url, "http://localhost:9999/compile");
    assert_eq!(String::from_utf8(out)?, "☢ done\n");
    assert_eq!(
        service.last_command(),
        format!(
            "g++-5.2 -std=c++1z -O1 {COMMON_FLAGS} main.cpp -lm -latomic -latomic && ./a.out; echo done"
        )
    );

    Ok(temp.close()?)
}

#[test]
fn test_failed_run_is_an_error() -> Result<()> {
    let temp = tempdir()?;
    std::fs::write(temp.path().join("main.c"), "int main(void) { return 0; }")?;
    let service = FakeService::answering(Err("503 Service Unavailable"));

    let result = run_ccrun_with(
        &CliArgs::parse_from(["", "run", "c", "main.c"]),
        temp.path(),
        |_| &service,
        &mut Vec::<u8>::new(),
    );

    let err = result.expect_err("A failed run must end the program with an error");
    assert!(format!("{err:#}").contains("503 Service Unavailable"));

    Ok(temp.close()?)
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let temp = tempdir()?;
    std::fs::write(temp.path().join("ccrun.toml"), "[rust]\nedition = 2021")?;
    let service = FakeService::answering(Ok(""));

    let result = run_ccrun_with(
        &CliArgs::parse_from(["", "command", "c"]),
        temp.path(),
        |_| &service,
        &mut Vec::<u8>::new(),
    );

    assert!(result.is_err());
    Ok(temp.close()?)
}

#[test]
fn test_catalog_lists_both_languages() -> Result<()> {
    let temp = tempdir()?;
    let service = FakeService::answering(Ok(""));
    let mut out = Vec::new();

    run_ccrun_with(
        &CliArgs::parse_from(["", "catalog"]),
        temp.path(),
        |_| &service,
        &mut out,
    )?;

    let printed = String::from_utf8(out)?;
    assert!(printed.starts_with("[c]\n"));
    assert!(printed.contains("[cpp]\n"));
    assert!(printed.contains("gcc-4.9"));
    assert!(service.last.borrow().is_none());

    Ok(temp.close()?)
}
