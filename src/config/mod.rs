// ==========================================
// 产品数据导入 - 配置层
// ==========================================
// 职责: 运行配置解析（命令行 > 环境变量 > 用户数据目录 > 当前目录）
// ==========================================

pub mod import_config;

pub use import_config::{get_default_db_path, resolve_db_path, ImportConfig, DB_PATH_ENV};
