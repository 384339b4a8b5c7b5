//! Runs a source file on the remote service: resolves the effective configuration,
//! generates the command line, submits it and maps the outcome to a [`RunOutput`]
pub mod output;
pub mod registry;
pub mod service;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use crate::{
    compiler,
    project_model::{compiler::Language, Overrides},
    utils::constants::debug_messages,
};

use self::{
    output::RunOutput,
    service::{ExecutionRequest, ExecutionService},
};

/// The per call context provided by the host
#[derive(Debug, Default, Clone)]
pub struct RunContext<'a> {
    pub overrides: Overrides<'a>,
}

impl<'a> RunContext<'a> {
    pub fn new(overrides: Overrides<'a>) -> Self {
        Self { overrides }
    }
}

/// Counts the runs that are waiting for the service.
///
/// Every run registers itself through a [`RunGuard`], which unregisters it when dropped, so
/// overlapping runs never clear the busy state of each other.
#[derive(Debug, Default)]
pub struct InFlight(AtomicUsize);

impl InFlight {
    pub fn enter(&self) -> RunGuard<'_> {
        self.0.fetch_add(1, Ordering::SeqCst);
        RunGuard(self)
    }

    pub fn is_running(&self) -> bool {
        self.count() > 0
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct RunGuard<'a>(&'a InFlight);

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0 .0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct CodeRunner<S> {
    service: S,
    in_flight: Arc<InFlight>,
}

impl<S: ExecutionService> CodeRunner<S> {
    pub fn new(service: S) -> Self {
        Self::with_in_flight(service, Arc::default())
    }

    /// Shares the busy state with whoever else holds `in_flight`
    pub fn with_in_flight(service: S, in_flight: Arc<InFlight>) -> Self {
        Self { service, in_flight }
    }

    pub fn in_flight(&self) -> &Arc<InFlight> {
        &self.in_flight
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.is_running()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// The command line that a run of `language` would submit under `context`
    pub fn command_line(&self, language: Language, context: &RunContext<'_>) -> String {
        log::debug!("{}", debug_messages::MERGING_CONFIGURATION);
        let config = context.overrides.resolve(language);
        compiler::generate_command_line(&config, language)
    }

    /// Compiles and runs `source_code` on the service. Never fails: a transport
    /// failure becomes an error [`RunOutput`]
    pub fn run(&self, source_code: &str, language: Language, context: &RunContext<'_>) -> RunOutput {
        let _guard = self.in_flight.enter();

        let command = self.command_line(language, context);
        let request = ExecutionRequest::new(command, source_code);

        match self.service.submit(&request) {
            Ok(text) => {
                log::info!("The {language} run finished");
                RunOutput::ansi(text)
            }
            Err(report) => {
                log::error!("{report:?}");
                RunOutput::error(format!("{report:#}"))
            }
        }
    }
}
