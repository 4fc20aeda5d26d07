use clap::Parser;
use odl_cfg_analysis::core::engine::AnalysisSummary;
use odl_cfg_analysis::utils::{logger, validation::Validate};
use odl_cfg_analysis::{
    AnalysisEngine, AnalysisError, AnalysisPipeline, CliConfig, FsDocumentSource, GraphStyle,
    LocalStorage,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting odl-cfg-analyze");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config) {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn run(config: CliConfig) -> Result<(), AnalysisError> {
    config.validate()?;

    let style = match &config.graph_style {
        Some(path) => {
            tracing::info!("🎨 Loading graph style from {}", path);
            GraphStyle::from_file(path)?
        }
        None => GraphStyle::default(),
    };

    let dry_run = config.dry_run;
    tracing::info!("Parsing files {:?}", config.paths_to_analyze);

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = AnalysisPipeline::new(FsDocumentSource::new(), storage, config, style);
    let engine = AnalysisEngine::new(pipeline);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be rendered");
        let summary = engine.dry_run()?;
        print_summary(&summary);
        return Ok(());
    }

    let output_path = engine.run()?;
    println!("✅ Graph at {} created successfully", output_path);
    Ok(())
}

fn print_summary(summary: &AnalysisSummary) {
    println!("📋 Analysis summary");
    println!("  Modules:           {}", summary.modules);
    println!("  Services:          {}", summary.services);
    println!("  Dependency edges:  {}", summary.edges);
    println!("  Unresolved edges:  {}", summary.unresolved_edges);
    if !summary.highlighted.is_empty() {
        println!("  Highlighted:       {}", summary.highlighted.join(", "));
    }
}
