// Application state shared by every route

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::responder::options::ResponderOptions;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub responder: Arc<ResponderOptions>,
}

impl AppState {
    /// Derives the responder options from the environment
    pub fn new(environment: EnvironmentVariables) -> Self {
        let responder: ResponderOptions = ResponderOptions::from_env(&environment);
        Self::with_options(environment, responder)
    }

    /// Uses explicit responder options instead of the environment switches
    pub fn with_options(environment: EnvironmentVariables, responder: ResponderOptions) -> Self {
        Self {
            environment: Arc::new(environment),
            responder: Arc::new(responder),
        }
    }

    /// Builds the state from the process-wide environment configuration
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
        Ok(Self::new(environment.clone()))
    }
}
