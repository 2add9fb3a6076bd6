// ==========================================
// 产品数据导入 - 导入层
// ==========================================
// 职责: CSV 行读取 → 字段映射 → 规则校验 → 转换 → 落库
// 支持: CSV（首行为表头）
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod product_importer_impl;
pub mod product_importer_trait;
pub mod record_parser;
pub mod transformer;
pub mod validator;

// 重导出核心类型
pub use error::{ImportError, ImportResult, RowError};
pub use file_parser::CsvRowSource;
pub use product_importer_impl::ProductImporterImpl;
pub use record_parser::RecordParser;
pub use transformer::RecordTransformer;
pub use validator::{ValidationPipeline, ValidationRule};

// 重导出 Trait 接口
pub use product_importer_trait::{ImportOptions, ProductImporter};
