//! Executor registry.
//!
//! Executors are kept in registration order. Resolution probes them in that
//! order and the first whose `can_execute` accepts the request wins.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::executor::MessageExecutor;
use crate::{Error, OrganizationRequest, Result};

/// What `register` does when an executor for the same request name exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Fail with a configuration error
    #[default]
    Reject,
    /// Accept; the earlier executor keeps winning resolution
    FirstMatch,
}

impl RegistrationPolicy {
    /// Parse the config file spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reject" => Some(RegistrationPolicy::Reject),
            "first_match" => Some(RegistrationPolicy::FirstMatch),
            _ => None,
        }
    }
}

/// Ordered collection of message executors.
#[derive(Clone, Default)]
pub struct ExecutorRegistry {
    executors: Vec<Arc<dyn MessageExecutor>>,
    policy: RegistrationPolicy,
}

impl fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("executors", &self.request_names())
            .field("policy", &self.policy)
            .finish()
    }
}

impl ExecutorRegistry {
    /// Empty registry.
    pub fn new(policy: RegistrationPolicy) -> Self {
        Self {
            executors: Vec::new(),
            policy,
        }
    }

    /// Registry holding the built-in executors.
    pub fn with_builtins(policy: RegistrationPolicy) -> Self {
        Self {
            executors: crate::handlers::builtin_executors(),
            policy,
        }
    }

    /// Duplicate handling policy.
    pub fn policy(&self) -> RegistrationPolicy {
        self.policy
    }

    /// Append an executor.
    ///
    /// Under [`RegistrationPolicy::Reject`] an executor whose request name is
    /// already claimed is refused.
    pub fn register(&mut self, executor: Arc<dyn MessageExecutor>) -> Result<()> {
        let name = executor.request_name();
        if self.policy == RegistrationPolicy::Reject && self.position(name).is_some() {
            warn!(target: "crmsim::registry", request = name, "duplicate executor rejected");
            return Err(Error::configuration(format!(
                "an executor for '{}' is already registered",
                name
            )));
        }
        self.executors.push(executor);
        info!(target: "crmsim::registry", request = name, total = self.executors.len(), "executor registered");
        Ok(())
    }

    /// Swap the executor claiming the same request name in place, or append
    /// when there is none. Returns the executor replaced.
    pub fn replace(&mut self, executor: Arc<dyn MessageExecutor>) -> Option<Arc<dyn MessageExecutor>> {
        let name = executor.request_name();
        match self.position(name) {
            Some(index) => {
                info!(target: "crmsim::registry", request = name, "executor replaced");
                Some(std::mem::replace(&mut self.executors[index], executor))
            }
            None => {
                self.executors.push(executor);
                None
            }
        }
    }

    /// Remove every executor claiming `request_name`. Returns how many went.
    pub fn unregister(&mut self, request_name: &str) -> usize {
        let before = self.executors.len();
        self.executors.retain(|e| e.request_name() != request_name);
        before - self.executors.len()
    }

    /// First executor that can handle `request`.
    pub fn resolve(&self, request: &OrganizationRequest) -> Result<Arc<dyn MessageExecutor>> {
        let found = self
            .executors
            .iter()
            .find(|e| e.can_execute(request))
            .cloned();
        match found {
            Some(executor) => {
                debug!(target: "crmsim::registry", request = %request.request_name, executor = executor.request_name(), "executor resolved");
                Ok(executor)
            }
            None => Err(Error::configuration(format!(
                "no executor found for request '{}'",
                request.request_name
            ))),
        }
    }

    /// Whether some executor claims `request_name`.
    pub fn contains(&self, request_name: &str) -> bool {
        self.position(request_name).is_some()
    }

    /// Claimed request names in probe order.
    pub fn request_names(&self) -> Vec<&'static str> {
        self.executors.iter().map(|e| e.request_name()).collect()
    }

    /// Number of executors.
    pub fn len(&self) -> usize {
        self.executors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    fn position(&self, request_name: &str) -> Option<usize> {
        self.executors
            .iter()
            .position(|e| e.request_name() == request_name)
    }
}
