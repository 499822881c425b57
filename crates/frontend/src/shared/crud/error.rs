//! Error types of the CRUD layer

use std::collections::BTreeMap;
use thiserror::Error;

/// Failure of one HTTP call to an entity service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("网络错误: {0}")]
    Network(String),
    /// Non-2xx answer; `message` comes from the backend body when present
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("数据解析失败: {0}")]
    Parse(String),
    #[error("请求构造失败: {0}")]
    Request(String),
}

impl ApiError {
    pub fn status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("请求失败 (HTTP {})", status));
        ApiError::Status { status, message }
    }
}

/// Rejections of the import dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("仅支持xls、xlsx格式文件")]
    UnsupportedFileType,
    #[error("请先选择要导入的文件")]
    NoFiles,
    #[error("没有可导入的数据")]
    NothingToCommit,
}

/// Inline validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("表单校验失败")]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_falls_back_to_code() {
        assert_eq!(
            ApiError::status(500, None).to_string(),
            "请求失败 (HTTP 500)"
        );
        assert_eq!(
            ApiError::status(400, Some("股票代码已存在".into())).to_string(),
            "股票代码已存在"
        );
    }

    #[test]
    fn import_messages() {
        assert_eq!(
            ImportError::UnsupportedFileType.to_string(),
            "仅支持xls、xlsx格式文件"
        );
        assert_eq!(ImportError::NoFiles.to_string(), "请先选择要导入的文件");
    }
}
