use anyhow::Context;
use clap::Parser;
use msg2pdf::core::ConfigProvider;
use msg2pdf::utils::error::{ConvertError, ErrorSeverity};
use msg2pdf::utils::{logger, validation::Validate};
use msg2pdf::{CliConfig, FolderBatchConverter, LopdfRenderer, MessageConverter, OutlookSource};
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        tracing::error!("❌ Conversion aborted: {:#}", err);

        match err.downcast_ref::<ConvertError>() {
            Some(e) => {
                tracing::error!(
                    "Category: {:?}, Severity: {:?}",
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());

                // 根據錯誤嚴重程度決定退出碼
                let exit_code = match e.severity() {
                    ErrorSeverity::Medium => 2,
                    ErrorSeverity::High => 1,
                    ErrorSeverity::Critical => 3,
                };
                std::process::exit(exit_code);
            }
            None => {
                eprintln!("❌ {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = CliConfig::parse();
    let settings = cli.resolve().context("failed to load configuration")?;

    logger::init_cli_logger(settings.verbose, settings.log_format);
    tracing::info!("Starting msg2pdf");
    tracing::debug!("Settings: {:?}", settings);

    settings.validate().context("invalid configuration")?;

    let converter = MessageConverter::new(OutlookSource::new(), LopdfRenderer::default());
    let batch = FolderBatchConverter::with_suffix(converter, settings.suffix());

    let jobs = batch
        .convert_folder(Path::new(settings.folder()))
        .with_context(|| format!("converting messages in {}", settings.folder()))?;

    tracing::info!("✅ Done: {} PDF(s) written to {}", jobs.len(), settings.folder());
    Ok(())
}
