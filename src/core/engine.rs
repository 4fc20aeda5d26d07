use crate::core::{AnalysisResult, Pipeline};
use crate::utils::error::Result;

/// Counts reported by a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSummary {
    pub modules: usize,
    pub services: usize,
    pub edges: usize,
    pub unresolved_edges: usize,
    pub highlighted: Vec<String>,
}

impl AnalysisSummary {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            modules: result.model.modules.len(),
            services: result.model.services.len(),
            edges: result.dependencies.len(),
            unresolved_edges: result.unresolved_count(),
            highlighted: result.interest.names().to_vec(),
        }
    }
}

pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform only.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        tracing::info!("Parsing configuration...");
        let model = self.pipeline.extract()?;
        tracing::info!(
            "Parsed {} modules, {} services, {} dependencies",
            model.modules.len(),
            model.services.len(),
            model.dependency_count()
        );

        tracing::info!("Resolving dependencies...");
        let result = self.pipeline.transform(model)?;
        let unresolved = result.unresolved_count();
        if unresolved > 0 {
            tracing::warn!("⚠️ {} dependencies could not be resolved", unresolved);
        }
        tracing::info!(
            "Graph has {} nodes and {} edges",
            result.graph.nodes.len(),
            result.graph.edges.len()
        );
        Ok(result)
    }

    pub fn run(&self) -> Result<String> {
        let result = self.analyze()?;

        tracing::info!("Rendering graph...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Graph saved to: {}", output_path);

        Ok(output_path)
    }

    pub fn dry_run(&self) -> Result<AnalysisSummary> {
        let result = self.analyze()?;
        Ok(AnalysisSummary::from_result(&result))
    }
}
