// ==========================================
// 产品数据导入 - 产品写入 Trait
// ==========================================
// 职责: 定义落库接口（不包含实现）
// 红线: Repository 不含业务规则，只做数据 CRUD
// ==========================================

use crate::domain::product::ProductRecord;
use crate::repository::error::RepositoryResult;

// ==========================================
// ProductSink Trait
// ==========================================
// 用途: 导入驱动的落库边界
// 实现者: ProductRepositoryImpl（使用 rusqlite）
pub trait ProductSink: Send + Sync {
    /// 写入单条产品记录
    ///
    /// # 返回
    /// - Ok(i64): 新记录 ID
    /// - Err: 约束违反 / 数据库错误（调用方计为写入失败）
    fn insert(&self, record: &ProductRecord) -> RepositoryResult<i64>;
}

impl<S: ProductSink + ?Sized> ProductSink for &S {
    fn insert(&self, record: &ProductRecord) -> RepositoryResult<i64> {
        (**self).insert(record)
    }
}

impl<S: ProductSink + ?Sized> ProductSink for Box<S> {
    fn insert(&self, record: &ProductRecord) -> RepositoryResult<i64> {
        (**self).insert(record)
    }
}

// ==========================================
// ProductRepository Trait
// ==========================================
// 用途: 导入结果核对（只读查询）
pub trait ProductRepository: ProductSink {
    /// 产品编码是否已存在
    fn exists_by_code(&self, product_code: &str) -> RepositoryResult<bool>;

    /// 按产品编码查询（同编码多条时返回最新一条）
    fn find_by_code(&self, product_code: &str) -> RepositoryResult<Option<ProductRecord>>;

    /// 统计产品记录数
    fn count_products(&self) -> RepositoryResult<usize>;
}
