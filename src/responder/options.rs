// Start of file: /src/responder/options.rs

/*
    * Response modes the middleware supports. Both are explicit switches so a
    * deployment can turn off JSONP or id checks without touching handlers.
*/

use std::borrow::Cow;

use crate::config::environment::EnvironmentVariables;

pub const DEFAULT_CALLBACK_NAME: &str = "callback";
pub const DEFAULT_BODY_LIMIT: usize = 2_097_152; // 2MB

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonpMode {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdValidation {
    #[default]
    Enabled,
    Disabled,
}

#[derive(Debug, Clone)]
pub struct ResponderOptions {
    pub jsonp: JsonpMode,
    pub id_validation: IdValidation,
    // Query parameter carrying the JSONP callback name
    pub callback_name: Cow<'static, str>,
    // Upper bound for bodies buffered by the validation guards
    pub body_limit: usize,
}

impl Default for ResponderOptions {
    fn default() -> Self {
        Self {
            jsonp: JsonpMode::default(),
            id_validation: IdValidation::default(),
            callback_name: Cow::Borrowed(DEFAULT_CALLBACK_NAME),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ResponderOptions {
    pub fn from_env(env: &EnvironmentVariables) -> Self {
        Self {
            jsonp: if env.responder_jsonp {
                JsonpMode::Enabled
            } else {
                JsonpMode::Disabled
            },
            id_validation: if env.responder_id_validation {
                IdValidation::Enabled
            } else {
                IdValidation::Disabled
            },
            callback_name: env.jsonp_callback_name.clone(),
            body_limit: env.max_request_body_size,
        }
    }

    pub fn jsonp(mut self, mode: JsonpMode) -> Self {
        self.jsonp = mode;
        self
    }

    pub fn id_validation(mut self, mode: IdValidation) -> Self {
        self.id_validation = mode;
        self
    }
}
