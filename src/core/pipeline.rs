use crate::config::style::GraphStyle;
use crate::core::{closure, graph, parser, resolver};
use crate::core::{
    AnalysisResult, ConfigModel, ConfigProvider, DocumentSource, Pipeline, Result, Storage,
};
use crate::render::{self, graphviz::GraphvizRenderer, OutputFormat};
use std::path::Path;

/// Snapshot analysis: parse and merge → resolve and highlight → render and write.
pub struct AnalysisPipeline<D: DocumentSource, S: Storage, C: ConfigProvider> {
    source: D,
    storage: S,
    config: C,
    style: GraphStyle,
    renderer: GraphvizRenderer,
}

impl<D: DocumentSource, S: Storage, C: ConfigProvider> AnalysisPipeline<D, S, C> {
    pub fn new(source: D, storage: S, config: C, style: GraphStyle) -> Self {
        Self {
            source,
            storage,
            config,
            style,
            renderer: GraphvizRenderer::default(),
        }
    }

    pub fn with_renderer(mut self, renderer: GraphvizRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Parse every document behind one input location and merge them.
    pub fn parse_location(&self, location: &str) -> Result<ConfigModel> {
        let documents = self.source.list_documents(Path::new(location))?;
        if documents.is_empty() {
            tracing::warn!("⚠️ No XML documents found in {}", location);
        }

        let mut models = Vec::with_capacity(documents.len());
        for document in &documents {
            let content = self.source.read_document(document)?;
            models.push(parser::parse_document(&content, &document.display().to_string())?);
        }
        Ok(ConfigModel::merge_all(models))
    }
}

impl<D: DocumentSource, S: Storage, C: ConfigProvider> Pipeline for AnalysisPipeline<D, S, C> {
    fn extract(&self) -> Result<ConfigModel> {
        let mut aggregated = ConfigModel::default();
        for location in self.config.paths_to_analyze() {
            tracing::debug!("Parsing {}", location);
            aggregated = aggregated.merge(self.parse_location(location)?);
            tracing::info!("📄 Parsed {}", location);
        }
        Ok(aggregated)
    }

    fn transform(&self, model: ConfigModel) -> Result<AnalysisResult> {
        let dependencies = resolver::resolve_dependencies(&model);

        let interest = closure::modules_of_interest(&model, self.config.highlight_modules());
        if !interest.is_empty() {
            tracing::info!("🎯 Highlighting modules: {:?}", interest.names());
        }

        let graph = graph::build_graph(&model, &dependencies, &interest, &self.style.labels);

        Ok(AnalysisResult {
            model,
            dependencies,
            interest,
            graph,
        })
    }

    fn load(&self, result: AnalysisResult) -> Result<String> {
        let format = OutputFormat::parse(self.config.graph_format())?;
        let dest = self.config.graph_file_dest();

        match &format {
            OutputFormat::Dot => {
                let source = render::dot::render(&result.graph, &self.style);
                self.storage
                    .write_file(&format!("{}.{}", dest, format.extension()), source.as_bytes())
            }
            OutputFormat::Json => {
                let json = render::json::render(&result.graph)?;
                self.storage
                    .write_file(&format!("{}.{}", dest, format.extension()), json.as_bytes())
            }
            OutputFormat::Image(image_format) => {
                let source = render::dot::render(&result.graph, &self.style);
                let source_path = self.storage.write_file(&format!("{}.gv", dest), source.as_bytes())?;
                tracing::debug!("Graph source written to {}", source_path);

                let image = self.renderer.render(&source, image_format)?;
                self.storage
                    .write_file(&format!("{}.{}", dest, format.extension()), &image)
            }
        }
    }
}
