//! Two-phase import dialog: upload, then preview and commit

use contracts::shared::crud::import::{error_count, ImportRow};

use super::error::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportStage {
    #[default]
    Upload,
    Preview,
}

/// Attached file; `F` is `web_sys::File` in the browser
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFile<F> {
    pub name: String,
    pub file: F,
}

pub fn is_spreadsheet(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".xls") || lower.ends_with(".xlsx")
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportFlow<F> {
    stage: ImportStage,
    files: Vec<PendingFile<F>>,
    rows: Vec<ImportRow>,
}

impl<F> Default for ImportFlow<F> {
    fn default() -> Self {
        Self {
            stage: ImportStage::Upload,
            files: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl<F: Clone> ImportFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> ImportStage {
        self.stage
    }

    pub fn files(&self) -> &[PendingFile<F>] {
        &self.files
    }

    pub fn rows(&self) -> &[ImportRow] {
        &self.rows
    }

    pub fn error_count(&self) -> usize {
        error_count(&self.rows)
    }

    /// Adds a file; anything but .xls / .xlsx is rejected and the list stays as is
    pub fn attach(&mut self, name: impl Into<String>, file: F) -> Result<(), ImportError> {
        let name = name.into();
        if !is_spreadsheet(&name) {
            return Err(ImportError::UnsupportedFileType);
        }
        self.files.push(PendingFile { name, file });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    /// Files to send to the parse endpoint
    pub fn begin_parse(&self) -> Result<Vec<F>, ImportError> {
        if self.files.is_empty() {
            return Err(ImportError::NoFiles);
        }
        Ok(self.files.iter().map(|f| f.file.clone()).collect())
    }

    pub fn show_preview(&mut self, rows: Vec<ImportRow>) {
        self.rows = rows;
        self.stage = ImportStage::Preview;
    }

    /// Clears files and rows and returns to the upload stage
    pub fn cancel(&mut self) {
        self.files.clear();
        self.rows.clear();
        self.stage = ImportStage::Upload;
    }

    pub fn finish(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::crud::import::committable;
    use serde_json::json;

    fn rows() -> Vec<ImportRow> {
        serde_json::from_value(json!([
            {"stock_code": "600000"},
            {"stock_code": "bad", "errMsg": "股票代码格式错误"}
        ]))
        .unwrap()
    }

    #[test]
    fn rejects_non_spreadsheet() {
        let mut flow = ImportFlow::new();
        flow.attach("stocks.xlsx", 1).unwrap();

        let err = flow.attach("report.txt", 2).unwrap_err();
        assert_eq!(err.to_string(), "仅支持xls、xlsx格式文件");
        assert_eq!(flow.files().len(), 1);
        assert_eq!(flow.files()[0].name, "stocks.xlsx");

        assert!(flow.attach("OLD.XLS", 3).is_ok());
        assert_eq!(flow.files().len(), 2);
    }

    #[test]
    fn zero_files_cannot_be_parsed() {
        let flow: ImportFlow<u8> = ImportFlow::new();
        assert_eq!(flow.begin_parse(), Err(ImportError::NoFiles));
    }

    #[test]
    fn preview_then_commit_then_back_to_upload() {
        let mut flow = ImportFlow::new();
        flow.attach("a.xlsx", "a").unwrap();
        flow.attach("b.xls", "b").unwrap();
        assert_eq!(flow.begin_parse().unwrap(), vec!["a", "b"]);

        flow.show_preview(rows());
        assert_eq!(flow.stage(), ImportStage::Preview);
        assert_eq!(flow.error_count(), 1);
        assert_eq!(committable(flow.rows()).len(), 1);

        flow.finish();
        assert_eq!(flow.stage(), ImportStage::Upload);
        assert!(flow.files().is_empty());
        assert!(flow.rows().is_empty());
    }

    #[test]
    fn all_rows_failing_leaves_nothing_to_commit() {
        let mut flow: ImportFlow<&str> = ImportFlow::new();
        flow.show_preview(vec![rows().remove(1)]);
        assert!(committable(flow.rows()).is_empty());
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut flow = ImportFlow::new();
        flow.attach("a.xlsx", 0).unwrap();
        flow.remove(5);
        assert_eq!(flow.files().len(), 1);
        flow.remove(0);
        assert!(flow.files().is_empty());
    }
}
