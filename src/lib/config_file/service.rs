//! The attribute that configures where the code is sent to be compiled and run
use serde::*;
use std::borrow::Cow;

/// [`ServiceAttribute`] - The remote compile-and-run service
///
/// * `url` - The endpoint that receives the `POST` with the command line and the source.
/// If isn't specified, [`crate::utils::constants::service::DEFAULT_URL`] is used
/// * `timeout_secs` - Upper bound for a request to the service. No bound by default
///
/// ```rust
/// use ccrun::config_file::service::ServiceAttribute;
///
/// const CONFIG_FILE_MOCK: &str = r#"
///     #[service]
///     url = 'http://localhost:8080/compile'
///     timeout_secs = 30
///"#;
///
/// let config: ServiceAttribute = toml::from_str(CONFIG_FILE_MOCK)
///    .expect("A failure happened parsing the ccrun toml file");
///
/// assert_eq!(config.url.as_deref(), Some("http://localhost:8080/compile"));
/// assert_eq!(config.timeout_secs, Some(30));
/// ```
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServiceAttribute<'a> {
    #[serde(borrow)]
    pub url: Option<Cow<'a, str>>,
    pub timeout_secs: Option<u64>,
}
