// ==========================================
// 产品数据导入 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 流程: CSV → 字段映射 → 规则校验 → 转换 → tbl_product_data
// 约束: 单线程顺序处理，行级错误不中断导入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行/记录/报告
pub mod domain;

// 数据仓储层 - 落库
pub mod repository;

// 导入层 - 解析/校验/转换/驱动
pub mod importer;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/迁移）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RowErrorKind, ValidationFailure};

// 领域实体
pub use domain::{FailedRow, Header, ImportReport, NamedRecord, ProductRecord, RawRow};

// 导入
pub use importer::{
    ImportError, ImportOptions, ImportResult, ProductImporter, ProductImporterImpl, RowError,
};

// 仓储
pub use repository::{
    ProductRepository, ProductRepositoryImpl, ProductSink, RepositoryError, RepositoryResult,
};

// 配置
pub use config::ImportConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产品数据导入工具";
