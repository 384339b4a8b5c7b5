//! The named entry points that the host registers, one per supported language

use indexmap::IndexMap;

use crate::project_model::compiler::Language;

use super::{output::RunOutput, service::ExecutionService, CodeRunner, RunContext};

pub type RunnerFn<S> = fn(&CodeRunner<S>, &str, &RunContext<'_>) -> RunOutput;

/// Maps every language name to the function that runs code written in it
pub fn code_runners<S: ExecutionService>() -> IndexMap<&'static str, RunnerFn<S>> {
    IndexMap::from([
        (Language::C.as_str(), run_c::<S> as RunnerFn<S>),
        (Language::Cpp.as_str(), run_cpp::<S> as RunnerFn<S>),
    ])
}

fn run_c<S: ExecutionService>(
    runner: &CodeRunner<S>,
    code: &str,
    context: &RunContext<'_>,
) -> RunOutput {
    runner.run(code, Language::C, context)
}

fn run_cpp<S: ExecutionService>(
    runner: &CodeRunner<S>,
    code: &str,
    context: &RunContext<'_>,
) -> RunOutput {
    runner.run(code, Language::Cpp, context)
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;
    use crate::runner::service::ExecutionRequest;

    struct Echo;

    impl ExecutionService for Echo {
        fn submit(&self, request: &ExecutionRequest) -> Result<String> {
            Ok(request.cmd.clone())
        }
    }

    #[test]
    fn test_registers_one_runner_per_language() {
        let runners = code_runners::<Echo>();
        assert_eq!(runners.keys().copied().collect::<Vec<_>>(), vec!["c", "cpp"]);

        let runner = CodeRunner::new(Echo);
        let context = RunContext::default();

        let c = runners["c"](&runner, "int main(void) {}", &context);
        assert!(c.text.starts_with("g++ -x c -std=c2x"));

        let cpp = runners["cpp"](&runner, "int main() {}", &context);
        assert!(cpp.text.starts_with("g++ -std=c++20"));
        assert!(runners.get("rust").is_none());
    }
}
