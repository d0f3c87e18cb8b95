//! ModelStatus - Outcome of the one-time model load.

use std::fmt;
use std::sync::Arc;

use crate::ports::{ModelLoadError, RiskModel};

/// Either a ready, shared model handle or the error that prevented loading.
///
/// Built once at startup and never changes for the life of the process.
#[derive(Clone)]
pub enum ModelStatus {
    Ready(Arc<dyn RiskModel>),
    Unavailable(ModelLoadError),
}

impl ModelStatus {
    pub fn ready(model: Arc<dyn RiskModel>) -> Self {
        ModelStatus::Ready(model)
    }

    pub fn from_load_result<M>(result: Result<M, ModelLoadError>) -> Self
    where
        M: RiskModel + 'static,
    {
        match result {
            Ok(model) => ModelStatus::Ready(Arc::new(model)),
            Err(err) => ModelStatus::Unavailable(err),
        }
    }

    /// The load error shown in place of the form.
    pub fn startup_error(&self) -> Option<&ModelLoadError> {
        match self {
            ModelStatus::Ready(_) => None,
            ModelStatus::Unavailable(err) => Some(err),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelStatus::Ready(_))
    }
}

impl fmt::Debug for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelStatus::Ready(model) => f.debug_tuple("Ready").field(&model.describe()).finish(),
            ModelStatus::Unavailable(err) => f.debug_tuple("Unavailable").field(err).finish(),
        }
    }
}
