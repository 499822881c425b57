//! Service calls behind the page's buttons and modals
//!
//! Every action follows the same lifecycle: loading flag on (drop guard),
//! await the service, then on success notify + close + refresh through the
//! [`CrudHost`], on failure notify the error. Nothing is written back to the
//! page once its lifetime token is cancelled.

use contracts::shared::crud::import::{committable, ImportRow};
use contracts::shared::crud::{BatchIds, BatchUpdate, CrudEntity, Payload};

use super::error::{ApiError, ImportError};
use super::form::merge_id;
use super::loading::{LoadingFlag, LoadingGuard};
use super::service::CrudService;
use crate::shared::export::DownloadFile;
use crate::shared::notify::NoticeLevel;

/// What an action may do to its page
pub trait CrudHost {
    fn notify(&self, level: NoticeLevel, message: String);
    /// Refetch the list with the last-used parameters
    fn mutate(&self);
    fn close_modal(&self);
    fn clear_selection(&self);
    fn download(&self, file: DownloadFile);
    /// False once the page has unmounted
    fn is_alive(&self) -> bool;
}

fn report_failure<H: CrudHost>(host: &H, action: &str, error: &ApiError) {
    log::error!("{} failed: {}", action, error);
    if host.is_alive() {
        host.notify(NoticeLevel::Error, error.to_string());
    }
}

fn finish_write<H: CrudHost>(host: &H, message: &str) {
    if !host.is_alive() {
        return;
    }
    host.notify(NoticeLevel::Success, message.to_string());
    host.close_modal();
    host.mutate();
}

pub async fn create<E, S, H, L>(service: &S, host: &H, loading: L, payload: Payload) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let _guard = LoadingGuard::new(loading);
    log::debug!("create {}", E::descriptor().collection);
    match service.create(&payload).await {
        Ok(()) => {
            log::info!("{} created", E::descriptor().collection);
            finish_write(host, "新建成功");
            true
        }
        Err(e) => {
            report_failure(host, "create", &e);
            false
        }
    }
}

/// Single update; the payload is sent with the target `id` merged in
pub async fn update<E, S, H, L>(service: &S, host: &H, loading: L, id: &str, payload: Payload) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let _guard = LoadingGuard::new(loading);
    let payload = merge_id(payload, id);
    log::debug!("update {} {}", E::descriptor().collection, id);
    match service.update(id, &payload).await {
        Ok(()) => {
            log::info!("{} {} updated", E::descriptor().collection, id);
            finish_write(host, "修改成功");
            true
        }
        Err(e) => {
            report_failure(host, "update", &e);
            false
        }
    }
}

/// One payload applied to every id
pub async fn batch_update<E, S, H, L>(
    service: &S,
    host: &H,
    loading: L,
    ids: Vec<String>,
    payload: Payload,
) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    if payload.is_empty() {
        host.notify(NoticeLevel::Warning, "请至少填写一个要修改的字段".to_string());
        return false;
    }
    let _guard = LoadingGuard::new(loading);
    let count = ids.len();
    let body = BatchUpdate::new(ids, payload);
    match service.batch_update(&body).await {
        Ok(()) => {
            log::info!("{} rows of {} updated", count, E::descriptor().collection);
            if host.is_alive() {
                host.clear_selection();
            }
            finish_write(host, &format!("批量修改成功，共{}条", count));
            true
        }
        Err(e) => {
            report_failure(host, "batch update", &e);
            false
        }
    }
}

pub async fn remove<E, S, H, L>(service: &S, host: &H, loading: L, id: &str) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let _guard = LoadingGuard::new(loading);
    match service.delete(id).await {
        Ok(()) => {
            log::info!("{} {} deleted", E::descriptor().collection, id);
            if host.is_alive() {
                host.clear_selection();
            }
            finish_write(host, "删除成功");
            true
        }
        Err(e) => {
            report_failure(host, "delete", &e);
            false
        }
    }
}

pub async fn batch_remove<E, S, H, L>(service: &S, host: &H, loading: L, ids: Vec<String>) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    if ids.is_empty() {
        return false;
    }
    let _guard = LoadingGuard::new(loading);
    let count = ids.len();
    match service.batch_delete(&BatchIds::new(ids)).await {
        Ok(()) => {
            log::info!("{} rows of {} deleted", count, E::descriptor().collection);
            if host.is_alive() {
                host.clear_selection();
            }
            finish_write(host, &format!("删除成功，共{}条", count));
            true
        }
        Err(e) => {
            report_failure(host, "batch delete", &e);
            false
        }
    }
}

/// Export of the selected rows (all rows when nothing is selected)
pub async fn export<E, S, H, L>(service: &S, host: &H, loading: L, ids: Vec<String>) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let _guard = LoadingGuard::new(loading);
    match service.export(&BatchIds::new(ids)).await {
        Ok(file) => {
            log::info!("exported {} ({} bytes)", file.filename, file.bytes.len());
            if host.is_alive() {
                host.download(file);
            }
            true
        }
        Err(e) => {
            report_failure(host, "export", &e);
            false
        }
    }
}

pub async fn export_template<E, S, H, L>(service: &S, host: &H, loading: L) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let _guard = LoadingGuard::new(loading);
    match service.export_template().await {
        Ok(file) => {
            if host.is_alive() {
                host.download(file);
            }
            true
        }
        Err(e) => {
            report_failure(host, "export template", &e);
            false
        }
    }
}

/// Upload phase confirm: zero files is a warning and never reaches the network
pub async fn parse_import<E, S, H, L>(
    service: &S,
    host: &H,
    loading: L,
    files: Vec<S::Upload>,
) -> Option<Vec<ImportRow>>
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    if files.is_empty() {
        host.notify(NoticeLevel::Warning, ImportError::NoFiles.to_string());
        return None;
    }
    let _guard = LoadingGuard::new(loading);
    match service.import(files).await {
        Ok(rows) => {
            log::info!("import parsed {} rows", rows.len());
            Some(rows)
        }
        Err(e) => {
            report_failure(host, "import", &e);
            None
        }
    }
}

/// Preview confirm: batch-create the rows without `errMsg`
pub async fn commit_import<E, S, H, L>(service: &S, host: &H, loading: L, rows: &[ImportRow]) -> bool
where
    E: CrudEntity,
    S: CrudService<E>,
    H: CrudHost,
    L: LoadingFlag,
{
    let payloads = committable(rows);
    if payloads.is_empty() {
        host.notify(NoticeLevel::Warning, ImportError::NothingToCommit.to_string());
        return false;
    }
    let _guard = LoadingGuard::new(loading);
    let count = payloads.len();
    match service.batch_create(&payloads).await {
        Ok(()) => {
            log::info!("imported {} rows into {}", count, E::descriptor().collection);
            finish_write(host, &format!("导入成功，共{}条", count));
            true
        }
        Err(e) => {
            report_failure(host, "import commit", &e);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory service and recording host shared by the CRUD tests

    use super::*;
    use async_trait::async_trait;
    use contracts::shared::crud::{ListQuery, ListResponse};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        List(ListQuery),
        Get(String),
        Create(Payload),
        Update(String, Payload),
        BatchUpdate(BatchUpdate),
        Delete(String),
        BatchDelete(BatchIds),
        Import(Vec<String>),
        BatchCreate(Vec<Payload>),
        ExportTemplate,
        Export(BatchIds),
    }

    pub struct MockService<E> {
        pub records: RefCell<Vec<E>>,
        pub calls: RefCell<Vec<Call>>,
        pub fail: Cell<bool>,
        pub import_rows: RefCell<Vec<ImportRow>>,
    }

    impl<E: CrudEntity> MockService<E> {
        pub fn new(records: Vec<E>) -> Self {
            Self {
                records: RefCell::new(records),
                calls: RefCell::new(Vec::new()),
                fail: Cell::new(false),
                import_rows: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: Call) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.fail.get() {
                return Err(ApiError::status(500, Some("服务器内部错误".into())));
            }
            Ok(())
        }
    }

    #[async_trait(?Send)]
    impl<E: CrudEntity> CrudService<E> for MockService<E> {
        type Upload = String;

        async fn list(&self, query: &ListQuery) -> Result<ListResponse<E>, ApiError> {
            self.record(Call::List(query.clone()))?;
            let records = self.records.borrow();
            let size = query.page.page_size.max(1) as usize;
            let start = (query.page.current.max(1) as usize - 1) * size;
            Ok(ListResponse {
                records: records.iter().skip(start).take(size).cloned().collect(),
                total: records.len() as u64,
            })
        }

        async fn get(&self, id: &str) -> Result<E, ApiError> {
            use contracts::shared::crud::EntityId;
            self.record(Call::Get(id.to_string()))?;
            self.records
                .borrow()
                .iter()
                .find(|r| r.id().as_string() == id)
                .cloned()
                .ok_or_else(|| ApiError::status(404, None))
        }

        async fn create(&self, payload: &Payload) -> Result<(), ApiError> {
            self.record(Call::Create(payload.clone()))
        }

        async fn update(&self, id: &str, payload: &Payload) -> Result<(), ApiError> {
            self.record(Call::Update(id.to_string(), payload.clone()))
        }

        async fn batch_update(&self, body: &BatchUpdate) -> Result<(), ApiError> {
            self.record(Call::BatchUpdate(body.clone()))
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.record(Call::Delete(id.to_string()))
        }

        async fn batch_delete(&self, body: &BatchIds) -> Result<(), ApiError> {
            self.record(Call::BatchDelete(body.clone()))
        }

        async fn import(&self, files: Vec<String>) -> Result<Vec<ImportRow>, ApiError> {
            self.record(Call::Import(files))?;
            Ok(self.import_rows.borrow().clone())
        }

        async fn batch_create(&self, payloads: &[Payload]) -> Result<(), ApiError> {
            self.record(Call::BatchCreate(payloads.to_vec()))
        }

        async fn export_template(&self) -> Result<DownloadFile, ApiError> {
            self.record(Call::ExportTemplate)?;
            Ok(DownloadFile {
                bytes: vec![1],
                filename: "模板.xlsx".into(),
            })
        }

        async fn export(&self, body: &BatchIds) -> Result<DownloadFile, ApiError> {
            self.record(Call::Export(body.clone()))?;
            Ok(DownloadFile {
                bytes: vec![1, 2, 3],
                filename: "export.xlsx".into(),
            })
        }
    }

    #[derive(Default)]
    pub struct RecordingHost {
        pub notices: RefCell<Vec<(NoticeLevel, String)>>,
        pub mutations: Cell<u32>,
        pub modal_closed: Cell<u32>,
        pub selection_cleared: Cell<u32>,
        pub downloads: RefCell<Vec<DownloadFile>>,
        pub unmounted: Cell<bool>,
    }

    impl RecordingHost {
        pub fn last_notice(&self) -> Option<(NoticeLevel, String)> {
            self.notices.borrow().last().cloned()
        }
    }

    impl CrudHost for RecordingHost {
        fn notify(&self, level: NoticeLevel, message: String) {
            self.notices.borrow_mut().push((level, message));
        }

        fn mutate(&self) {
            self.mutations.set(self.mutations.get() + 1);
        }

        fn close_modal(&self) {
            self.modal_closed.set(self.modal_closed.get() + 1);
        }

        fn clear_selection(&self) {
            self.selection_cleared.set(self.selection_cleared.get() + 1);
        }

        fn download(&self, file: DownloadFile) {
            self.downloads.borrow_mut().push(file);
        }

        fn is_alive(&self) -> bool {
            !self.unmounted.get()
        }
    }

    pub fn flag() -> Rc<Cell<bool>> {
        Rc::new(Cell::new(false))
    }
}

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use contracts::domain::a001_stock::{Stock, StockId};
    use contracts::system::User;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> Payload {
        match value {
            serde_json::Value::Object(map) => map,
            _ => Payload::new(),
        }
    }

    #[tokio::test]
    async fn create_success_mutates_once_and_closes() {
        let service = MockService::<Stock>::new(Vec::new());
        let host = RecordingHost::default();
        let loading = flag();

        let ok = create(&service, &host, loading.clone(), payload(json!({"stock_code": "600000"}))).await;

        assert!(ok);
        assert_eq!(host.mutations.get(), 1);
        assert_eq!(host.modal_closed.get(), 1);
        assert_eq!(host.last_notice(), Some((NoticeLevel::Success, "新建成功".into())));
        assert!(!loading.get());
    }

    #[tokio::test]
    async fn failure_notifies_and_keeps_modal_open() {
        let service = MockService::<Stock>::new(Vec::new());
        service.fail.set(true);
        let host = RecordingHost::default();
        let loading = flag();

        let ok = update(&service, &host, loading.clone(), "1", payload(json!({"stock_name": "x"}))).await;

        assert!(!ok);
        assert_eq!(host.mutations.get(), 0);
        assert_eq!(host.modal_closed.get(), 0);
        assert_eq!(host.last_notice(), Some((NoticeLevel::Error, "服务器内部错误".into())));
        assert!(!loading.get());
    }

    #[tokio::test]
    async fn update_merges_target_id() {
        let service = MockService::<User>::new(Vec::new());
        let host = RecordingHost::default();

        update(&service, &host, flag(), "7", payload(json!({"nick_name": "管理员"}))).await;

        assert_eq!(
            service.calls(),
            vec![Call::Update("7".into(), payload(json!({"nick_name": "管理员", "id": "7"})))]
        );
        assert_eq!(host.mutations.get(), 1);
    }

    #[tokio::test]
    async fn batch_remove_sends_ids_and_clears_selection() {
        let service = MockService::<Stock>::new(Vec::new());
        let host = RecordingHost::default();

        let ok = batch_remove(&service, &host, flag(), vec!["a".into(), "b".into()]).await;

        assert!(ok);
        assert_eq!(
            service.calls(),
            vec![Call::BatchDelete(BatchIds::new(vec!["a".into(), "b".into()]))]
        );
        assert_eq!(host.selection_cleared.get(), 1);
        assert_eq!(host.mutations.get(), 1);
    }

    #[tokio::test]
    async fn remove_single_row() {
        let service = MockService::<Stock>::new(vec![Stock {
            id: StockId::new("1"),
            ..Stock::default()
        }]);
        let host = RecordingHost::default();

        assert!(remove(&service, &host, flag(), "1").await);
        assert_eq!(service.calls(), vec![Call::Delete("1".into())]);
        assert_eq!(host.mutations.get(), 1);
        assert_eq!(host.modal_closed.get(), 1);
    }

    #[tokio::test]
    async fn batch_update_applies_payload_to_every_id() {
        let service = MockService::<User>::new(Vec::new());
        let host = RecordingHost::default();

        batch_update(&service, &host, flag(), vec!["1".into(), "2".into()], payload(json!({"status": "1"}))).await;

        assert_eq!(
            service.calls(),
            vec![Call::BatchUpdate(BatchUpdate::new(
                vec!["1".into(), "2".into()],
                payload(json!({"status": "1"}))
            ))]
        );
        assert_eq!(host.mutations.get(), 1);
    }

    #[tokio::test]
    async fn empty_batch_payload_is_rejected_locally() {
        let service = MockService::<User>::new(Vec::new());
        let host = RecordingHost::default();

        assert!(!batch_update(&service, &host, flag(), vec!["1".into(), "2".into()], Payload::new()).await);
        assert!(service.calls().is_empty());
        assert_eq!(host.last_notice().map(|n| n.0), Some(NoticeLevel::Warning));
    }

    #[tokio::test]
    async fn import_with_zero_files_never_calls_service() {
        let service = MockService::<Stock>::new(Vec::new());
        let host = RecordingHost::default();

        let rows = parse_import(&service, &host, flag(), Vec::new()).await;

        assert!(rows.is_none());
        assert!(service.calls().is_empty());
        assert_eq!(
            host.last_notice(),
            Some((NoticeLevel::Warning, "请先选择要导入的文件".into()))
        );
    }

    #[tokio::test]
    async fn import_commit_skips_error_rows() {
        let service = MockService::<Stock>::new(Vec::new());
        *service.import_rows.borrow_mut() = serde_json::from_value(json!([
            {"stock_code": "600000", "stock_name": "浦发银行"},
            {"stock_code": "", "errMsg": "股票代码不能为空"}
        ]))
        .unwrap();
        let host = RecordingHost::default();

        let rows = parse_import(&service, &host, flag(), vec!["stocks.xlsx".into()])
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);

        assert!(commit_import(&service, &host, flag(), &rows).await);
        assert_eq!(
            service.calls().last(),
            Some(&Call::BatchCreate(vec![payload(
                json!({"stock_code": "600000", "stock_name": "浦发银行"})
            )]))
        );
        assert_eq!(host.mutations.get(), 1);
        assert_eq!(host.modal_closed.get(), 1);
    }

    #[tokio::test]
    async fn export_downloads_file() {
        let service = MockService::<Stock>::new(Vec::new());
        let host = RecordingHost::default();

        assert!(export(&service, &host, flag(), vec!["1".into()]).await);
        assert_eq!(host.downloads.borrow().len(), 1);
        assert_eq!(host.mutations.get(), 0);
    }

    #[tokio::test]
    async fn unmounted_page_is_not_touched() {
        let service = MockService::<Stock>::new(Vec::new());
        let host = RecordingHost::default();
        host.unmounted.set(true);
        let loading = flag();

        assert!(create(&service, &host, loading.clone(), Payload::new()).await);
        assert_eq!(host.mutations.get(), 0);
        assert!(host.notices.borrow().is_empty());
        assert!(!loading.get());
    }
}
