// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、CSV 文件生成等功能
// ==========================================

#![allow(dead_code)]

use product_import::ProductRepositoryImpl;
use rusqlite::Connection;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 表头行
pub const HEADER: &str =
    "Product Code,Product Name,Product Description,Stock,Cost in GBP,Discontinued";

/// 创建临时测试数据库（已执行迁移）
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();

    // 通过 Repository 初始化 schema
    ProductRepositoryImpl::new(&db_path)?;

    Ok((temp_file, db_path))
}

/// 打开测试数据库连接（用于直接核对表内容）
pub fn open_conn(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(Connection::open(db_path)?)
}

/// 写入临时 CSV 文件（自动加表头）
pub fn write_csv(rows: &[&str]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".csv").tempfile()?;
    writeln!(temp_file, "{}", HEADER)?;
    for row in rows {
        writeln!(temp_file, "{}", row)?;
    }
    temp_file.flush()?;
    Ok(temp_file)
}

/// 统计表内行数
pub fn count_rows(conn: &Connection) -> Result<i64, Box<dyn Error>> {
    Ok(conn.query_row("SELECT COUNT(*) FROM tbl_product_data", [], |row| row.get(0))?)
}
