use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::Value;
use crate::{Error, Result};

/// Exclusive upper bound of `topk`
pub const MAX_TOPK: u32 = 10000;
pub const DEFAULT_TOPK: u32 = 100;
pub const DEFAULT_RADIUS: f32 = 0.5;

/// One customization of a knn query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOption {
    TopK(u32),
    Radius(f32),
    LinearSearch,
    /// Higher latency, not recommended in production
    DebugMode,
    Param { key: String, value: Value },
}

impl QueryOption {
    pub fn topk(topk: u32) -> Self {
        QueryOption::TopK(topk)
    }

    pub fn radius(radius: f32) -> Self {
        QueryOption::Radius(radius)
    }

    pub fn param(key: impl Into<String>, value: impl Into<Value>) -> Self {
        QueryOption::Param {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Resolved knn query options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub topk: u32,
    pub radius: f32,
    pub linear: bool,
    pub debug: bool,
    pub extra_params: HashMap<String, String>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            topk: DEFAULT_TOPK,
            radius: DEFAULT_RADIUS,
            linear: false,
            debug: false,
            extra_params: HashMap::new(),
        }
    }
}

impl QueryOptions {
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    /// Apply one option; a rejected option leaves `self` untouched
    pub fn apply(&mut self, option: QueryOption) -> Result<()> {
        match option {
            QueryOption::TopK(topk) => {
                if topk >= MAX_TOPK {
                    return Err(Error::Validation(format!(
                        "topk must be less than {}, got {}",
                        MAX_TOPK, topk
                    )));
                }
                self.topk = topk;
            }
            QueryOption::Radius(radius) => {
                // NaN fails this comparison as well
                if !(radius >= 0.0) {
                    return Err(Error::Validation(format!(
                        "radius must not be negative, got {}",
                        radius
                    )));
                }
                self.radius = radius;
            }
            QueryOption::LinearSearch => self.linear = true,
            QueryOption::DebugMode => self.debug = true,
            QueryOption::Param { key, value } => {
                let kind = value.kind();
                if !kind.is_generic() {
                    return Err(Error::Validation(format!(
                        "param {} has unsupported value type {}",
                        key, kind
                    )));
                }
                self.extra_params.insert(key, value.to_string());
            }
        }
        Ok(())
    }

    /// Start from the defaults and apply every option in order
    ///
    /// All options are tried; if any was rejected the first rejection is returned.
    pub fn from_options<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = QueryOption>,
    {
        let mut resolved = QueryOptions::default();
        let mut first_error = None;
        for option in options {
            if let Err(e) = resolved.apply(option) {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(resolved),
        }
    }
}

/// Collects options and validates them once in [`build`](Self::build)
#[derive(Debug, Clone, Default)]
pub struct QueryOptionsBuilder {
    options: Vec<QueryOption>,
}

impl QueryOptionsBuilder {
    #[must_use]
    pub fn topk(mut self, topk: u32) -> Self {
        self.options.push(QueryOption::TopK(topk));
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: f32) -> Self {
        self.options.push(QueryOption::Radius(radius));
        self
    }

    #[must_use]
    pub fn linear_search(mut self) -> Self {
        self.options.push(QueryOption::LinearSearch);
        self
    }

    #[must_use]
    pub fn debug_mode(mut self) -> Self {
        self.options.push(QueryOption::DebugMode);
        self
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.push(QueryOption::param(key, value));
        self
    }

    #[must_use]
    pub fn option(mut self, option: QueryOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Result<QueryOptions> {
        QueryOptions::from_options(self.options)
    }
}
