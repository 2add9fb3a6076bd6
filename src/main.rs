// ==========================================
// 产品数据导入 - 命令行入口
// ==========================================
// 用法: product-import <path> [--test] [--db <file>] [--json] [--log-json]
// 退出码: 行级失败不影响退出码；文件不可用或数据库无法打开时返回 1
// ==========================================

use clap::Parser;
use product_import::config::ImportConfig;
use product_import::{
    logging, ImportOptions, ImportReport, ProductImporter, ProductImporterImpl,
    ProductRepositoryImpl,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "product-import")]
#[command(version, about = "Import product data from a CSV file into tbl_product_data", long_about = None)]
struct Cli {
    /// Input CSV file (first row is the header)
    path: PathBuf,

    /// Test mode: validate and transform every row without writing to the database
    #[arg(long = "test", visible_alias = "dry-run")]
    test: bool,

    /// SQLite database file (default: PRODUCT_IMPORT_DB_PATH or the user data directory)
    #[arg(long)]
    db: Option<String>,

    /// Print the import report as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = ImportConfig::from_cli(cli.db.as_deref(), cli.test, cli.json, cli.log_json);

    logging::init_with_format(config.json_logs);

    tracing::info!(
        version = product_import::VERSION,
        dry_run = config.dry_run,
        "{}",
        product_import::APP_NAME
    );

    if let Err(e) = run(&cli.path, &config) {
        eprintln!("导入失败: {:#}", e);
        std::process::exit(1);
    }
}

fn run(path: &std::path::Path, config: &ImportConfig) -> anyhow::Result<()> {
    // 测试模式不会调用 insert，内存库仅用于满足导入器的 Sink 类型参数，不创建数据库文件
    let repo = if config.dry_run {
        ProductRepositoryImpl::in_memory()?
    } else {
        tracing::info!(db_path = %config.db_path, "使用数据库");
        ProductRepositoryImpl::new(&config.db_path)?
    };

    let importer = ProductImporterImpl::new(repo);
    let options = ImportOptions {
        dry_run: config.dry_run,
        ..ImportOptions::default()
    };

    let report = importer.import_from_csv(path, &options)?;

    if config.json_report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ImportReport) {
    if report.dry_run {
        println!("测试模式: 未写入数据库");
    }
    println!("已处理: {}", report.processed);
    println!("成功:   {}", report.success);
    println!("失败:   {}", report.error);
    if report.interrupted {
        println!("导入提前结束（部分行未处理）");
    }

    if !report.failed_rows.is_empty() {
        println!("失败行:");
        for failed in &report.failed_rows {
            println!(
                "  第 {} 行 [{}] {}",
                failed.line_number,
                failed.error.code(),
                failed.raw_text
            );
        }
    }
}
