// ==========================================
// 产品数据导入 - 运行配置
// ==========================================
// 职责: 汇总单次运行所需配置，解析数据库路径
// 优先级: 命令行 --db > PRODUCT_IMPORT_DB_PATH > 用户数据目录 > ./product_import.db
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 数据库路径环境变量
pub const DB_PATH_ENV: &str = "PRODUCT_IMPORT_DB_PATH";

/// 用户数据目录下的应用子目录
pub const DATA_DIR_NAME: &str = "product-import";

/// 数据库文件名
pub const DB_FILE_NAME: &str = "product_import.db";

// ==========================================
// ImportConfig - 单次运行配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// 数据库文件路径（测试模式下不会创建）
    pub db_path: String,
    /// 测试模式
    pub dry_run: bool,
    /// 以 JSON 输出报告
    pub json_report: bool,
    /// 以 JSON 输出日志
    pub json_logs: bool,
}

impl ImportConfig {
    /// 由命令行参数构建配置
    pub fn from_cli(db: Option<&str>, dry_run: bool, json_report: bool, json_logs: bool) -> Self {
        let db_path = match db.map(str::trim).filter(|p| !p.is_empty()) {
            Some(path) => path.to_string(),
            None => get_default_db_path(),
        };

        Self {
            db_path,
            dry_run,
            json_report,
            json_logs,
        }
    }
}

/// 解析数据库路径（纯函数，便于测试）
pub fn resolve_db_path(
    explicit: Option<&str>,
    env_value: Option<&str>,
    data_dir: Option<&Path>,
) -> PathBuf {
    for candidate in [explicit, env_value].into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match data_dir {
        Some(dir) => dir.join(DATA_DIR_NAME).join(DB_FILE_NAME),
        None => PathBuf::from(".").join(DB_FILE_NAME),
    }
}

/// 获取默认数据库路径
///
/// 未显式指定时使用用户数据目录，并确保目录存在
pub fn get_default_db_path() -> String {
    let env_value = std::env::var(DB_PATH_ENV).ok();
    let path = resolve_db_path(None, env_value.as_deref(), dirs::data_dir().as_deref());

    if env_value.as_deref().map(str::trim).unwrap_or_default().is_empty() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    path.to_string_lossy().to_string()
}
