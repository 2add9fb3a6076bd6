// ==========================================
// 产品数据导入 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析（流式，逐行产出）
// 支持: CSV (.csv，逗号分隔，首行为表头)
// ==========================================

use crate::domain::product::{Header, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use csv::{ByteRecord, Reader, ReaderBuilder};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

// ==========================================
// CsvRowSource - CSV 行源
// ==========================================
// 文件句柄由 reader 持有,随 CsvRowSource 释放而关闭
pub struct CsvRowSource<R: Read> {
    reader: Reader<R>,
    header: Header,
    record: ByteRecord,
}

impl CsvRowSource<File> {
    /// 打开 CSV 文件并读取表头
    ///
    /// # 返回
    /// - Err(FileNotFound / FileUnavailable): 文件不存在或不可读（未处理任何行）
    pub fn open<P: AsRef<Path>>(file_path: P) -> ImportResult<Self> {
        let path = file_path.as_ref();
        let display = path.display().to_string();

        // 检查文件存在且可读
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ImportError::FileNotFound(display.clone()),
            _ => ImportError::FileUnavailable {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;

        let metadata = file.metadata().map_err(|e| ImportError::FileUnavailable {
            path: display.clone(),
            message: e.to_string(),
        })?;
        if metadata.is_dir() {
            return Err(ImportError::FileUnavailable {
                path: display,
                message: "路径是目录".to_string(),
            });
        }

        Self::from_reader(file)
    }
}

impl<R: Read> CsvRowSource<R> {
    /// 从任意输入流构建（读取首行作为表头）
    pub fn from_reader(input: R) -> ImportResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致，由 RecordParser 判定
            .from_reader(input);

        // 读取表头
        let header = Header::new(reader.byte_headers()?.iter().enumerate().map(
            |(idx, h)| {
                let name = String::from_utf8_lossy(h).into_owned();
                if idx == 0 {
                    name.trim_start_matches('\u{feff}').to_string()
                } else {
                    name
                }
            },
        ));

        Ok(Self {
            reader,
            header,
            record: ByteRecord::new(),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = ImportResult<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_byte_record(&mut self.record) {
            Ok(true) => {
                let line_number = self
                    .record
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or_default();
                // 非 UTF-8 字节按替换字符处理，避免整行丢失
                let fields = self
                    .record
                    .iter()
                    .map(|f| String::from_utf8_lossy(f).into_owned())
                    .collect();
                Some(Ok(RawRow::new(line_number, fields)))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
