//! Data hooks: list / detail / reference options

use std::future::Future;

use contracts::shared::crud::{CrudEntity, ListQuery, ListResponse};
use contracts::shared::metadata::RefSpec;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use super::error::ApiError;
use super::loading::{CancelToken, LoadingGuard, RequestSeq};
use super::service::{fetch_json, CrudService};
use crate::shared::api_utils::api_url;

/// Page size used to load reference option lists
pub const REF_OPTIONS_PAGE_SIZE: u32 = 1000;

/// Starts a list request now; resolves to `None` if a newer one was started meanwhile
pub fn fetch_latest<'a, E, S>(
    service: &'a S,
    query: &'a ListQuery,
    seq: &'a RequestSeq,
) -> impl Future<Output = Option<Result<ListResponse<E>, ApiError>>> + 'a
where
    E: CrudEntity,
    S: CrudService<E>,
{
    let ticket = seq.begin();
    async move {
        let result = service.list(query).await;
        seq.is_current(ticket).then_some(result)
    }
}

/// Reactive result of `use_entity_list`
pub struct ListHandle<E: Send + Sync + 'static> {
    pub items: RwSignal<Vec<E>>,
    pub total: RwSignal<u64>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    trigger: RwSignal<u64>,
}

impl<E: Send + Sync + 'static> Clone for ListHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for ListHandle<E> {}

impl<E: Send + Sync + 'static> ListHandle<E> {
    /// Refetch with the last-used parameters
    pub fn mutate(&self) {
        let _ = self.trigger.try_update(|n| *n += 1);
    }
}

/// Fetches a page whenever `params` changes or `mutate` is called.
///
/// Only the latest request may write results; nothing is written once
/// `token` is cancelled.
pub fn use_entity_list<E, S>(service: S, params: Signal<ListQuery>, token: CancelToken) -> ListHandle<E>
where
    E: CrudEntity,
    S: CrudService<E> + Clone + 'static,
{
    let handle = ListHandle {
        items: RwSignal::new(Vec::new()),
        total: RwSignal::new(0),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
        trigger: RwSignal::new(0),
    };
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let query = params.get();
        handle.trigger.track();

        let service = service.clone();
        let seq = seq.clone();
        let token = token.clone();
        spawn_local(async move {
            let guard = LoadingGuard::new(handle.is_loading);
            let outcome = fetch_latest(&service, &query, &seq).await;
            if token.is_cancelled() {
                guard.disarm();
                return;
            }
            match outcome {
                None => {
                    log::debug!("discarding superseded {} list response", E::descriptor().collection);
                    guard.disarm();
                }
                Some(Ok(page)) => {
                    log::info!(
                        "{}: {} of {} rows",
                        E::descriptor().collection,
                        page.records.len(),
                        page.total
                    );
                    let _ = handle.error.try_set(None);
                    let _ = handle.total.try_set(page.total);
                    let _ = handle.items.try_set(page.records);
                }
                Some(Err(e)) => {
                    log::error!("{} list failed: {}", E::descriptor().collection, e);
                    let _ = handle.error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    handle
}

/// Reactive result of `use_entity_detail`
pub struct DetailHandle<E: Send + Sync + 'static> {
    pub record: RwSignal<Option<E>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<E: Send + Sync + 'static> Clone for DetailHandle<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Send + Sync + 'static> Copy for DetailHandle<E> {}

/// Fetches the full record for the drawer whenever `id` changes
pub fn use_entity_detail<E, S>(service: S, id: Signal<Option<String>>, token: CancelToken) -> DetailHandle<E>
where
    E: CrudEntity,
    S: CrudService<E> + Clone + 'static,
{
    let handle = DetailHandle {
        record: RwSignal::new(None),
        is_loading: RwSignal::new(false),
        error: RwSignal::new(None),
    };
    let seq = RequestSeq::new();

    Effect::new(move |_| {
        let Some(id) = id.get() else {
            seq.begin();
            handle.record.set(None);
            handle.error.set(None);
            return;
        };
        let service = service.clone();
        let seq = seq.clone();
        let token = token.clone();
        let ticket = seq.begin();
        spawn_local(async move {
            let guard = LoadingGuard::new(handle.is_loading);
            let result = service.get(&id).await;
            if token.is_cancelled() || !seq.is_current(ticket) {
                guard.disarm();
                return;
            }
            match result {
                Ok(record) => {
                    let _ = handle.error.try_set(None);
                    let _ = handle.record.try_set(Some(record));
                }
                Err(e) => {
                    log::error!("{} {} fetch failed: {}", E::descriptor().collection, id, e);
                    let _ = handle.record.try_set(None);
                    let _ = handle.error.try_set(Some(e.to_string()));
                }
            }
        });
    });

    handle
}

/// Option of a Reference / IdList widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefOption {
    pub value: String,
    pub label: String,
}

fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Options from the raw records of the referenced collection
pub fn ref_options(spec: &RefSpec, records: &[Value]) -> Vec<RefOption> {
    records
        .iter()
        .filter_map(|record| {
            let value = text_of(record.get(spec.value_field))?;
            let label = text_of(record.get(spec.label_field)).unwrap_or_else(|| value.clone());
            Some(RefOption { value, label })
        })
        .collect()
}

pub async fn fetch_ref_options(spec: RefSpec) -> Result<Vec<RefOption>, ApiError> {
    let query = ListQuery::options(REF_OPTIONS_PAGE_SIZE);
    let qs = serde_qs::to_string(&query).map_err(|e| ApiError::Request(e.to_string()))?;
    let url = format!("{}/list?{}", api_url(spec.service_path), qs);
    let page: ListResponse<Value> = fetch_json(&url).await?;
    Ok(ref_options(&spec, &page.records))
}

/// Options of one reference target, loaded once per mount
pub fn use_ref_options(spec: RefSpec) -> RwSignal<Vec<RefOption>> {
    let options = RwSignal::new(Vec::new());
    let token = CancelToken::for_current_owner();
    spawn_local(async move {
        match fetch_ref_options(spec).await {
            Ok(list) if !token.is_cancelled() => {
                let _ = options.try_set(list);
            }
            Ok(_) => {}
            Err(e) => log::error!("options of {} failed: {}", spec.service_path, e),
        }
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::actions::testing::MockService;
    use contracts::domain::a001_stock::{Stock, StockId};
    use contracts::shared::crud::PageRequest;
    use contracts::system::options::{DICT_TYPE_REF, MENU_REF};
    use serde_json::json;

    fn stocks(n: usize) -> Vec<Stock> {
        (0..n)
            .map(|i| Stock {
                id: StockId::new(i.to_string()),
                stock_code: format!("{:06}", 600000 + i),
                ..Stock::default()
            })
            .collect()
    }

    fn query(current: u32) -> ListQuery {
        ListQuery::new(PageRequest::new(current, 10, &[]), Default::default())
    }

    #[tokio::test]
    async fn refetch_with_same_params_is_idempotent() {
        let service = MockService::new(stocks(25));
        let seq = RequestSeq::new();
        let q = query(3);

        let first = fetch_latest(&service, &q, &seq).await.unwrap().unwrap();
        let second = fetch_latest(&service, &q, &seq).await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total, 25);
        assert_eq!(first.records.len(), 5);
    }

    #[tokio::test]
    async fn superseded_response_is_discarded() {
        let service = MockService::new(stocks(3));
        let seq = RequestSeq::new();
        let q1 = query(1);
        let q2 = query(1);

        let older = fetch_latest(&service, &q1, &seq);
        let newer = fetch_latest(&service, &q2, &seq);

        assert!(older.await.is_none());
        assert!(newer.await.is_some());
    }

    #[test]
    fn options_use_value_and_label_fields() {
        let records = vec![
            json!({"id": 1, "menu_name": "系统管理"}),
            json!({"id": "2", "menu_name": ""}),
            json!({"menu_name": "无ID"}),
        ];
        let options = ref_options(&MENU_REF, &records);
        assert_eq!(
            options,
            vec![
                RefOption { value: "1".into(), label: "系统管理".into() },
                RefOption { value: "2".into(), label: "2".into() },
            ]
        );

        let dict = ref_options(&DICT_TYPE_REF, &[json!({"id": "9", "dict_type": "sys_user_sex", "dict_name": "用户性别"})]);
        assert_eq!(dict[0].value, "sys_user_sex");
        assert_eq!(dict[0].label, "用户性别");
    }
}
