// Search orchestration: resolve the place name, run the search, normalize.

use std::sync::Arc;

use serde::Serialize;

use crate::config::OrchestratorConfig;
use crate::error::ApiError;
use crate::normalizer::{NormalizedResultSet, ResultNormalizer};
use crate::params::SearchParams;
use crate::resolver::{CoordinateResolution, CoordinateResolver, Provenance};
use crate::search::SearchService;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub results: NormalizedResultSet,
    pub provenance: Provenance,
    // `None` when the parameters carried no place name
    pub resolution: Option<CoordinateResolution>,
    // Parameters as sent, including the resolver's bookkeeping
    pub params: SearchParams,
}

pub struct SearchOrchestrator {
    resolver: CoordinateResolver,
    search: Arc<dyn SearchService>,
    normalizer: ResultNormalizer,
    config: OrchestratorConfig,
}

impl SearchOrchestrator {
    pub fn new(
        resolver: CoordinateResolver,
        search: Arc<dyn SearchService>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            resolver,
            search,
            normalizer: ResultNormalizer::new(),
            config,
        }
    }

    /// Resolves the place name (if any) and folds the outcome into the
    /// parameters. Never fails: an unresolved place only sets the flag.
    pub async fn prepare(
        &self,
        mut params: SearchParams,
    ) -> (SearchParams, Option<CoordinateResolution>) {
        let Some(location) = params.location().map(str::to_string) else {
            return (params, None);
        };

        let resolution = self.resolver.resolve(&location).await;
        match resolution.coordinate {
            Some(coordinate) => {
                params.apply_coordinate(
                    coordinate,
                    resolution.clone(),
                    self.config.default_search_radius,
                );
            }
            None => {
                tracing::warn!(location = %location, "coordinate resolution failed, searching without it");
                params.mark_coordinate_failed();
            }
        }

        (params, Some(resolution))
    }

    pub async fn search(&self, params: SearchParams) -> Result<SearchOutcome, ApiError> {
        let (params, resolution) = self.prepare(params).await;

        if self.config.debug {
            tracing::info!(params = ?params.fields, "search parameters");
        }

        let raw = self.search.search(&params).await?;
        let results = self.normalizer.normalize(&raw);

        if self.config.debug {
            tracing::info!(diagnostics = ?results.diagnostics, "search response shape");
        }
        tracing::info!(
            hotels = results.hotels.len(),
            record_count = ?results.record_count,
            recognized = results.recognized,
            "search complete"
        );

        let provenance = resolution
            .as_ref()
            .map_or(Provenance::None, |r| r.provenance);

        Ok(SearchOutcome {
            results,
            provenance,
            resolution,
            params,
        })
    }
}
