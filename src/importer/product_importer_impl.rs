// ==========================================
// 产品数据导入 - 导入驱动实现
// ==========================================
// 职责: 整合导入流程，从文件到数据库
// 流程: 读表头 → (空白行跳过 → 映射 → 校验 → 转换 → 落库)* → 报告
// 约束: 单线程顺序处理；行级错误记录后继续，不重试
// ==========================================

use crate::domain::product::{Header, ImportReport, RawRow, ValidationOutcome};
use crate::importer::error::{ImportResult, RowError};
use crate::importer::file_parser::CsvRowSource;
use crate::importer::product_importer_trait::{ImportOptions, ProductImporter};
use crate::importer::record_parser::RecordParser;
use crate::importer::transformer::RecordTransformer;
use crate::importer::validator::ValidationPipeline;
use crate::repository::ProductSink;
use chrono::Utc;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ProductImporterImpl - 产品数据导入器实现
// ==========================================
pub struct ProductImporterImpl<S>
where
    S: ProductSink,
{
    // 落库边界
    sink: S,

    // 导入组件
    pipeline: ValidationPipeline,
    transformer: RecordTransformer,
}

impl<S> ProductImporterImpl<S>
where
    S: ProductSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            pipeline: ValidationPipeline::standard(),
            transformer: RecordTransformer,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 导入已拆分好的行（表头 + 行序列）
    pub fn import_rows<I>(&self, header: Header, rows: I, options: &ImportOptions) -> ImportReport
    where
        I: IntoIterator<Item = RawRow>,
    {
        let run_id = Uuid::new_v4().to_string();
        self.run(run_id, header, rows.into_iter().map(Ok), None, options)
    }

    /// 行处理主循环
    #[instrument(skip(self, header, rows, options), fields(dry_run = options.dry_run))]
    fn run<I>(
        &self,
        run_id: String,
        header: Header,
        rows: I,
        file_path: Option<String>,
        options: &ImportOptions,
    ) -> ImportReport
    where
        I: Iterator<Item = ImportResult<RawRow>>,
    {
        let start_time = Instant::now();
        let mut report = ImportReport::new(run_id, file_path, options.dry_run);

        // === 步骤 1: 表头检查 ===
        if header.is_empty() {
            warn!("文件无表头，未处理任何行");
        } else {
            let missing = header.missing_columns();
            if !missing.is_empty() {
                warn!(missing = ?missing, "表头缺少识别列，相关行将无法通过校验");
            }
        }
        let parser = RecordParser::new(header);

        // === 步骤 2: 逐行处理 ===
        for row in rows {
            if options.should_stop() {
                warn!(processed = report.processed, "收到停止信号，提前结束导入");
                report.interrupted = true;
                break;
            }

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    error!(error = %e, processed = report.processed, "行读取失败，提前结束导入");
                    report.interrupted = true;
                    break;
                }
            };

            // 空白行: 不计数、不校验、不报告
            if row.is_blank() {
                debug!(line = row.line_number, "跳过空白行");
                continue;
            }

            match self.process_row(&parser, &row, options.dry_run) {
                Ok(()) => report.record_success(),
                Err((err, raw_text)) => {
                    warn!(
                        line = row.line_number,
                        kind = %err.kind(),
                        reason = err.code(),
                        raw = %raw_text,
                        "行导入失败: {}", err
                    );
                    report.record_failure(row.line_number, err, raw_text);
                }
            }
        }

        report.elapsed_ms = start_time.elapsed().as_millis();

        info!(
            processed = report.processed,
            success = report.success,
            error = report.error,
            interrupted = report.interrupted,
            elapsed_ms = report.elapsed_ms as u64,
            "产品数据导入完成"
        );

        report
    }

    /// 单行处理: 映射 → 校验 → 转换 → 落库
    ///
    /// 失败时返回行级错误与原始行文本
    fn process_row(
        &self,
        parser: &RecordParser,
        row: &RawRow,
        dry_run: bool,
    ) -> Result<(), (RowError, String)> {
        let record = parser.parse(row).map_err(|e| (e, row.raw_text()))?;

        let record = match self.pipeline.validate(record) {
            ValidationOutcome::Valid(record) => record,
            ValidationOutcome::Rejected { reason, raw_row } => {
                return Err((reason.into(), raw_row));
            }
        };

        let product = self.transformer.transform(&record, Utc::now());

        if dry_run {
            let payload = serde_json::to_string(&product).unwrap_or_default();
            info!(line = row.line_number, data = %payload, "测试模式: 待写入数据（不会保存）");
            return Ok(());
        }

        match self.sink.insert(&product) {
            Ok(id) => {
                debug!(line = row.line_number, id = id, code = %product.product_code, "写入成功");
                Ok(())
            }
            Err(e) => {
                error!(line = row.line_number, error = %e, "写入失败");
                Err((
                    RowError::InsertFailed {
                        message: e.to_string(),
                    },
                    record.raw_text().to_string(),
                ))
            }
        }
    }

    fn run_source<R: Read>(
        &self,
        source: CsvRowSource<R>,
        file_path: Option<String>,
        options: &ImportOptions,
    ) -> ImportReport {
        let run_id = Uuid::new_v4().to_string();
        let header = source.header().clone();
        self.run(run_id, header, source, file_path, options)
    }
}

impl<S> ProductImporter for ProductImporterImpl<S>
where
    S: ProductSink,
{
    fn import_from_csv<P: AsRef<Path>>(
        &self,
        file_path: P,
        options: &ImportOptions,
    ) -> ImportResult<ImportReport> {
        let path = file_path.as_ref().display().to_string();
        info!(file_path = %path, dry_run = options.dry_run, "开始导入产品数据");

        // 文件不可用: 运行级失败，不生成报告
        let source = CsvRowSource::open(file_path.as_ref()).map_err(|e| {
            error!(file_path = %path, error = %e, "文件不可用");
            e
        })?;

        Ok(self.run_source(source, Some(path), options))
    }

    fn import_from_reader<R: Read>(
        &self,
        input: R,
        options: &ImportOptions,
    ) -> ImportResult<ImportReport> {
        let source = CsvRowSource::from_reader(input)?;
        Ok(self.run_source(source, None, options))
    }
}
