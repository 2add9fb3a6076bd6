// ==========================================
// 产品数据导入 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 按 schema_version 顺序执行迁移
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;
use tracing::{debug, info};

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version（与 MIGRATIONS 最后一项对齐）
pub const CURRENT_SCHEMA_VERSION: i64 = 2;

/// 迁移列表（版本号, SQL）
///
/// - v1: 创建 tbl_product_data
/// - v2: 增加库存与价格列
const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        r#"
        CREATE TABLE IF NOT EXISTS tbl_product_data (
            product_data_id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name    VARCHAR(50)  NOT NULL CHECK (length(product_name) <= 50),
            product_desc    VARCHAR(255) NOT NULL CHECK (length(product_desc) <= 255),
            product_code    VARCHAR(10)  NOT NULL CHECK (length(product_code) <= 10),
            added_at        DATETIME,
            discontinued_at DATETIME,
            updated_ts      DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_product_data_code
            ON tbl_product_data (product_code);

        CREATE TRIGGER IF NOT EXISTS trg_product_data_touch
        AFTER UPDATE ON tbl_product_data
        FOR EACH ROW
        BEGIN
            UPDATE tbl_product_data
               SET updated_ts = CURRENT_TIMESTAMP
             WHERE product_data_id = OLD.product_data_id;
        END;
        "#,
    ),
    (
        2,
        r#"
        ALTER TABLE tbl_product_data
            ADD COLUMN stock INTEGER CHECK (stock IS NULL OR stock >= 0);
        ALTER TABLE tbl_product_data
            ADD COLUMN cost DECIMAL(10, 2);
        "#,
    ),
];

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// 执行未应用的迁移（幂等）
///
/// # 返回
/// - 迁移后的 schema_version
pub fn run_migrations(conn: &Connection) -> rusqlite::Result<i64> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;

    let current = read_schema_version(conn)?.unwrap_or(0);
    let mut applied = current;

    for (version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        debug!(version = version, "执行数据库迁移");
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        tx.commit()?;
        applied = *version;
    }

    if applied != current {
        info!(from = current, to = applied, "数据库迁移完成");
    }

    Ok(applied)
}
