use std::{ops::Deref, sync::Arc};

use crate::{
    catalog::CatalogClient,
    error::{ErrorVerbosity, ErrorVerbosityProvider},
    telemetry::Telemetry,
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, catalog: CatalogClient, telemetry: Telemetry) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                catalog,
                telemetry,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    catalog: CatalogClient,
    telemetry: Telemetry,
}

impl ApiStateInner {
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}

impl ErrorVerbosityProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }
}
