use clap::Parser;
use md_bundle::core::ConfigProvider;
use md_bundle::utils::{logger, validation::Validate};
use md_bundle::{BundleEngine, LocalStorage, SimplePipeline, TomlConfig};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "toml-bundle")]
#[command(about = "Markdown bundling tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bundle.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be bundled without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based bundle tool");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    // 決定監控設定
    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.root_path().to_string());
    let pipeline = SimplePipeline::new(storage, config);

    // 創建引擎並運行
    let engine = BundleEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Documentation bundle completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Documentation bundle completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Bundle process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!("📋 Bundle: {}", config.bundle.name);
    if let Some(description) = &config.bundle.description {
        tracing::info!("📋 Description: {}", description);
    }
    tracing::info!("📋 Root: {}", config.root_path());
    tracing::info!("📋 Output file: {}", config.output_file());
    tracing::info!("📋 Excluded directories: {:?}", config.excluded_dirs());
    tracing::info!("📋 Manifest: {}", config.manifest_enabled());
    if args.dry_run {
        tracing::info!("📋 Mode: dry run");
    }
}

/// 列出會被打包的檔案，不刪除、不讀取、不寫入
fn perform_dry_run(config: &TomlConfig) {
    let root = Path::new(config.root_path());
    let excluded: HashSet<&str> = config.excluded_dirs().iter().map(String::as_str).collect();

    let mut paths: Vec<String> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !(e.file_type().is_dir()
                    && e.file_name()
                        .to_str()
                        .is_some_and(|name| excluded.contains(name)))
        })
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "md")
        })
        .filter_map(|e| {
            e.path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().into_owned())
        })
        // 真正執行時會先刪掉舊輸出檔，所以這裡也不列出它
        .filter(|rel| rel.as_str() != config.output_file())
        .collect();

    paths.sort();

    println!("Would bundle {} markdown files:", paths.len());
    for path in &paths {
        println!("  {}", path);
    }
    println!("Would write: {}/{}", config.root_path(), config.output_file());
}
