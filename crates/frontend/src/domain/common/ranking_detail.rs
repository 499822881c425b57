//! Detail page of one ranked stock: the ranking row plus the stock's statements

use contracts::shared::crud::filters::seed_filters;
use contracts::shared::crud::{CrudEntity, ListQuery, PageRequest, Payload};
use contracts::shared::crud::list::FIRST_PAGE;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use serde_json::Value;
use thaw::*;

use crate::shared::crud::format::format_value;
use crate::shared::crud::loading::{CancelToken, LoadingGuard};
use crate::shared::crud::service::{CrudService, HttpCrudService};
use crate::shared::crud::{ActionConfig, CrudPage, CrudPageConfig};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

/// Query for the ranking row of `stock_code` in `period`
pub fn summary_query(stock_code: &str, period: &str) -> ListQuery {
    ListQuery::new(
        PageRequest::new(FIRST_PAGE, 1, &[]),
        seed_filters([
            ("stock_code", stock_code.to_string()),
            ("period", period.to_string()),
        ]),
    )
}

/// `R` is the ranking entity, `S` the statement listed under the summary
#[component]
pub fn RankingDetail<R, S>(
    #[prop(into)] code: String,
    #[prop(into)] period: String,
    /// Route of the ranking list
    back_href: &'static str,
    statements_title: &'static str,
    #[prop(optional)] _marker: std::marker::PhantomData<fn() -> (R, S)>,
) -> impl IntoView
where
    R: CrudEntity,
    S: CrudEntity,
{
    let descriptor = R::descriptor();
    let summary = RwSignal::new(None::<Payload>);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let token = CancelToken::for_current_owner();

    {
        let query = summary_query(&code, &period);
        let service = HttpCrudService::<R>::new();
        spawn_local(async move {
            let guard = LoadingGuard::new(is_loading);
            let result = service.list(&query).await;
            if token.is_cancelled() {
                guard.disarm();
                return;
            }
            match result {
                Ok(page) => {
                    let row = page.records.first().map(|r| r.to_fields());
                    if row.is_none() {
                        log::warn!("{}: no ranking row for {:?}", descriptor.collection, query.filters);
                    }
                    let _ = summary.try_set(row);
                }
                Err(e) => {
                    log::error!("{} summary failed: {}", descriptor.collection, e);
                    let _ = error.try_set(Some(e.to_string()));
                }
            }
        });
    }

    let statements = CrudPageConfig::<S>::new()
        .title(statements_title)
        .category(PAGE_CAT_DETAIL)
        .actions(ActionConfig::READ_ONLY.with_export())
        .query(&["year", "quarter", "report_type"])
        .fixed_filters(seed_filters([("stock_code", code.clone())]))
        .embedded();

    let fields = descriptor.detail_fields();
    let heading = format!("{} · {} · {}", descriptor.element_name, code, period);

    view! {
        <PageFrame page_id=page_id(&descriptor.full_name(), PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href=back_href attr:class="page__back">
                        {icon("chevron-left")}
                        " 返回"
                    </A>
                    <h1 class="page__title">{heading}</h1>
                </div>
            </div>
            <div class="page__content">
                <div class="details-container">
                    {move || {
                        if is_loading.get() {
                            return view! { <Spinner /> }.into_any();
                        }
                        if let Some(err) = error.get() {
                            return view! { <div class="alert alert--error">{err}</div> }.into_any();
                        }
                        match summary.get() {
                            Some(row) => view! {
                                <dl class="detail-list detail-list--grid">
                                    {fields
                                        .iter()
                                        .map(|field| {
                                            let value = row.get(field.name).cloned().unwrap_or(Value::Null);
                                            view! {
                                                <div class="detail-list__item">
                                                    <dt class="detail-list__label">{field.label}</dt>
                                                    <dd class="detail-list__value">{format_value(field, &value)}</dd>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </dl>
                            }
                            .into_any(),
                            None => view! { <div class="table-empty">"暂无排行数据"</div> }.into_any(),
                        }
                    }}
                </div>
                <CrudPage<S> config=statements />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_query_targets_one_row() {
        let query = summary_query("600000", "2023");
        assert_eq!(query.page.current, 1);
        assert_eq!(query.page.page_size, 1);
        assert_eq!(
            Value::Object(query.filters),
            json!({"stock_code": "600000", "period": "2023"})
        );
    }

    #[test]
    fn empty_period_is_not_sent() {
        let query = summary_query("600000", "");
        assert_eq!(Value::Object(query.filters), json!({"stock_code": "600000"}));
    }
}
