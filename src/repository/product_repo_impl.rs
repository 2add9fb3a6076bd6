// ==========================================
// 产品数据导入 - 产品 Repository 实现
// ==========================================
// 职责: 实现产品写入与核对查询（使用 rusqlite）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::db::{configure_sqlite_connection, open_sqlite_connection, run_migrations};
use crate::domain::product::ProductRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::product_repo::{ProductRepository, ProductSink};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ProductRepositoryImpl
// ==========================================
pub struct ProductRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepositoryImpl {
    /// 创建新的 Repository 实例（自动执行迁移）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 内存数据库（测试模式 / 单元测试）
    pub fn in_memory() -> RepositoryResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        configure_sqlite_connection(&conn)?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 并执行迁移（均幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            run_migrations(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

impl ProductSink for ProductRepositoryImpl {
    fn insert(&self, record: &ProductRecord) -> RepositoryResult<i64> {
        let conn = self.lock()?;

        conn.execute(
            r#"
            INSERT INTO tbl_product_data (
                product_name, product_desc, product_code,
                stock, cost, added_at, discontinued_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.product_name,
                record.product_desc,
                record.product_code,
                record.stock,
                record.cost,
                record.added_at,
                record.discontinued_at,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }
}

impl ProductRepository for ProductRepositoryImpl {
    fn exists_by_code(&self, product_code: &str) -> RepositoryResult<bool> {
        let conn = self.lock()?;

        let exists = conn
            .query_row(
                "SELECT 1 FROM tbl_product_data WHERE product_code = ?1 LIMIT 1",
                params![product_code],
                |_row| Ok(true),
            )
            .optional()?
            .unwrap_or(false);

        Ok(exists)
    }

    fn find_by_code(&self, product_code: &str) -> RepositoryResult<Option<ProductRecord>> {
        let conn = self.lock()?;

        let record = conn
            .query_row(
                r#"
                SELECT product_code, product_name, product_desc,
                       stock, cost, discontinued_at, added_at
                FROM tbl_product_data
                WHERE product_code = ?1
                ORDER BY product_data_id DESC
                LIMIT 1
                "#,
                params![product_code],
                |row| {
                    Ok(ProductRecord {
                        product_code: row.get(0)?,
                        product_name: row.get(1)?,
                        product_desc: row.get(2)?,
                        stock: row.get::<_, Option<i64>>(3)?.unwrap_or_default(),
                        cost: row.get(4)?,
                        discontinued_at: row.get(5)?,
                        added_at: row.get(6)?,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        let conn = self.lock()?;

        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM tbl_product_data", [], |row| row.get(0))?;

        Ok(count as usize)
    }
}
