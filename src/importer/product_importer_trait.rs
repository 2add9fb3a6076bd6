// ==========================================
// 产品数据导入 - 导入器 Trait
// ==========================================
// 职责: 定义导入接口与运行选项（不包含实现）
// ==========================================

use crate::domain::product::ImportReport;
use crate::importer::error::ImportResult;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// ==========================================
// ImportOptions - 运行选项
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// 测试模式: 完整校验与转换，但不落库
    pub dry_run: bool,
    /// 外部停止信号（行与行之间检查）
    pub stop_signal: Option<Arc<AtomicBool>>,
}

impl ImportOptions {
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    pub fn with_stop_signal(mut self, signal: Arc<AtomicBool>) -> Self {
        self.stop_signal = Some(signal);
        self
    }

    pub fn should_stop(&self) -> bool {
        self.stop_signal
            .as_ref()
            .is_some_and(|s| s.load(Ordering::Relaxed))
    }
}

// ==========================================
// ProductImporter Trait
// ==========================================
// 用途: 产品导入主接口
// 实现者: ProductImporterImpl
pub trait ProductImporter {
    /// 从 CSV 文件导入产品数据
    ///
    /// # 返回
    /// - Ok(ImportReport): 导入报告（行级错误已计入报告）
    /// - Err: 文件不存在/不可读（未处理任何行）
    ///
    /// # 导入流程
    /// 1. 读取表头
    /// 2. 逐行: 空白行跳过 → 字段映射 → 规则校验 → 转换 → 落库
    /// 3. 汇总报告
    fn import_from_csv<P: AsRef<Path>>(
        &self,
        file_path: P,
        options: &ImportOptions,
    ) -> ImportResult<ImportReport>;

    /// 从任意输入流导入（首行为表头）
    fn import_from_reader<R: Read>(
        &self,
        input: R,
        options: &ImportOptions,
    ) -> ImportResult<ImportReport>;
}
