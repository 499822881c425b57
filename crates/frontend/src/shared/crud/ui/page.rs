//! The generic CRUD page
//!
//! Query panel → page state → list hook → table; the action bar and row
//! actions open the modals, whose service calls go through
//! [`actions`](crate::shared::crud::actions) with a [`PageHost`] as the
//! handle back into this page.

use contracts::shared::crud::{CrudEntity, EntityId, Filters, Payload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::action_bar::ActionBar;
use super::column_picker::ColumnPicker;
use super::data_table::{DataTable, RowAction};
use super::detail_drawer::DetailDrawer;
use super::entity_form_modal::EntityFormModal;
use super::import_dialog::{BrowserImportFlow, ImportDialog};
use super::query_panel::QueryPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::crud::actions::{self, CrudHost};
use crate::shared::crud::form::{FormMode, FormValues};
use crate::shared::crud::hooks::{use_entity_detail, use_entity_list, ListHandle};
use crate::shared::crud::loading::{BusyCounter, CancelToken};
use crate::shared::crud::query::{query_fields, QueryField, QueryForm};
use crate::shared::crud::service::HttpCrudService;
use crate::shared::crud::state::{ActionConfig, CrudModal, CrudPageState};
use crate::shared::export::{save_file, DownloadFile};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notify::{use_notifications, NoticeLevel, NotificationService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

/// How one entity's page is instantiated
pub struct CrudPageConfig<E: CrudEntity> {
    title: Option<String>,
    category: &'static str,
    actions: ActionConfig,
    query_fields: Vec<QueryField>,
    initial_filters: Filters,
    fixed_filters: Filters,
    row_actions: Vec<RowAction<E>>,
    page_size: Option<u32>,
    embedded: bool,
}

impl<E: CrudEntity> Default for CrudPageConfig<E> {
    fn default() -> Self {
        Self {
            title: None,
            category: PAGE_CAT_LIST,
            actions: ActionConfig::ALL,
            query_fields: Vec::new(),
            initial_filters: Filters::new(),
            fixed_filters: Filters::new(),
            row_actions: Vec::new(),
            page_size: None,
            embedded: false,
        }
    }
}

impl<E: CrudEntity> CrudPageConfig<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page title; defaults to the entity's list name
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    pub fn actions(mut self, actions: ActionConfig) -> Self {
        self.actions = actions;
        self
    }

    /// Query inputs for the named entity fields, in the given order
    pub fn query(mut self, names: &[&str]) -> Self {
        self.query_fields
            .extend(query_fields(E::descriptor().fields, names));
        self
    }

    pub fn query_field(mut self, field: QueryField) -> Self {
        self.query_fields.push(field);
        self
    }

    /// Pre-filled query (also shown in the panel)
    pub fn initial_filters(mut self, filters: Filters) -> Self {
        self.initial_filters = filters;
        self
    }

    /// Always sent, never shown in the panel
    pub fn fixed_filters(mut self, filters: Filters) -> Self {
        self.fixed_filters = filters;
        self
    }

    pub fn row_action(mut self, action: RowAction<E>) -> Self {
        self.row_actions.push(action);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Rendered as a section inside another page instead of a routed page
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}

/// The page as seen by the actions
#[derive(Clone)]
struct PageHost<E: CrudEntity> {
    notices: NotificationService,
    state: RwSignal<CrudPageState<E>>,
    list: ListHandle<E>,
    import: RwSignal<BrowserImportFlow, LocalStorage>,
    token: CancelToken,
}

impl<E: CrudEntity> CrudHost for PageHost<E> {
    fn notify(&self, level: NoticeLevel, message: String) {
        self.notices.push(level, message);
    }

    fn mutate(&self) {
        self.list.mutate();
    }

    fn close_modal(&self) {
        let _ = self.state.try_update(|s| s.close_modal());
        let _ = self.import.try_update(|f| f.finish());
    }

    fn clear_selection(&self) {
        let _ = self.state.try_update(|s| s.selection.clear());
    }

    fn download(&self, file: DownloadFile) {
        if let Err(e) = save_file(&file) {
            log::error!("download of {} failed: {}", file.filename, e);
            self.notices.error(format!("文件下载失败: {}", e));
        }
    }

    fn is_alive(&self) -> bool {
        !self.token.is_cancelled()
    }
}

#[component]
pub fn CrudPage<E>(config: CrudPageConfig<E>) -> impl IntoView
where
    E: CrudEntity,
{
    let descriptor = E::descriptor();
    let app_config = use_app_config();
    let notices = use_notifications();
    let token = CancelToken::for_current_owner();
    let service = HttpCrudService::<E>::new();

    let CrudPageConfig {
        title,
        category,
        actions: action_config,
        query_fields,
        initial_filters,
        fixed_filters,
        row_actions: extra_row_actions,
        page_size,
        embedded,
    } = config;
    let title = title.unwrap_or_else(|| descriptor.list_name.to_string());
    let page_size = page_size.unwrap_or(app_config.default_page_size);
    let has_query = !query_fields.is_empty();

    let state = RwSignal::new(
        CrudPageState::<E>::new(descriptor, page_size)
            .with_filters(initial_filters.clone())
            .with_fixed_filters(fixed_filters),
    );
    let query_form = RwSignal::new(QueryForm::new(query_fields).with_values(&initial_filters));
    let busy = BusyCounter::new();
    let is_busy = busy.signal();
    let import_flow = RwSignal::new_local(BrowserImportFlow::new());

    // Selection and modal changes must not refetch
    let params = Memo::new(move |_| state.with(|s| s.list_query()));
    let list = use_entity_list(service.clone(), params.into(), token.clone());

    let host = PageHost {
        notices,
        state,
        list,
        import: import_flow,
        token: token.clone(),
    };

    // Deleting the last rows of the last page leaves the index past the end
    Effect::new(move |_| {
        let total = list.total.get();
        let past_end = state.with_untracked(|s| s.pagination.current > s.pagination.total_pages(total));
        if past_end {
            state.update(|s| {
                s.clamp_page(total);
            });
        }
    });

    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let detail_id = Memo::new(move |_| match modal.get() {
        CrudModal::Detail(id) => Some(id),
        _ => None,
    });
    let detail = use_entity_detail(service.clone(), detail_id.into(), token.clone());
    let pending_delete = RwSignal::new(None::<E>);

    // ------------------------------------------------------------------
    // Query, pagination, sort, selection
    // ------------------------------------------------------------------

    // An unchanged request would not re-fire the params memo
    let on_submit_query = Callback::new(move |filters: Filters| {
        log::debug!("{}: query {:?}", descriptor.collection, filters);
        if state.try_update(|s| s.submit_query(filters)) == Some(false) {
            list.mutate();
        }
    });
    let on_reset_query = Callback::new(move |_: ()| {
        if state.try_update(|s| s.reset_query()) == Some(false) {
            list.mutate();
        }
    });
    let on_page_change = Callback::new(move |(page, size): (u32, u32)| state.update(|s| s.change_page(page, size)));
    let on_sort = Callback::new(move |field: &'static str| state.update(|s| s.toggle_sort(field)));

    let on_toggle_row = Callback::new(move |(key, checked): (String, bool)| {
        let row = list.items.with_untracked(|items| items.iter().find(|r| r.row_key() == key).cloned());
        if let Some(row) = row {
            state.update(|s| s.selection.toggle(key, row, checked));
        }
    });
    let on_toggle_all = Callback::new(move |checked: bool| {
        if checked {
            list.items.with_untracked(|items| state.update(|s| s.set_selection(items)));
        } else {
            state.update(|s| s.selection.clear());
        }
    });
    let on_toggle_column = Callback::new(move |(column, visible): (&'static str, bool)| {
        state.update(|s| s.toggle_column(column, visible));
    });

    // ------------------------------------------------------------------
    // Toolbar
    // ------------------------------------------------------------------

    let on_export = {
        let service = service.clone();
        let host = host.clone();
        Callback::new(move |_: ()| {
            let service = service.clone();
            let host = host.clone();
            let ids = state.with_untracked(|s| s.selection.ids());
            spawn_local(async move {
                actions::export::<E, _, _, _>(&service, &host, busy, ids).await;
            });
        })
    };
    let on_batch_remove = {
        let service = service.clone();
        let host = host.clone();
        Callback::new(move |_: ()| {
            let service = service.clone();
            let host = host.clone();
            let ids = state.with_untracked(|s| s.selection.ids());
            spawn_local(async move {
                actions::batch_remove::<E, _, _, _>(&service, &host, busy, ids).await;
            });
        })
    };

    // ------------------------------------------------------------------
    // Row actions: view / modify / delete, then the page's own
    // ------------------------------------------------------------------

    let mut row_actions = vec![RowAction::new("查看", move |row: E| {
        state.update(|s| s.open_detail(row.id().as_string()))
    })];
    if action_config.modify {
        row_actions.push(RowAction::new("修改", move |row: E| state.update(|s| s.begin_update(row))));
    }
    if action_config.remove {
        row_actions.push(RowAction::new("删除", move |row: E| pending_delete.set(Some(row))).danger());
    }
    row_actions.extend(extra_row_actions);

    let confirm_delete = {
        let service = service.clone();
        let host = host.clone();
        move || {
            let Some(row) = pending_delete.get_untracked() else { return };
            pending_delete.set(None);
            let service = service.clone();
            let host = host.clone();
            spawn_local(async move {
                let id = row.id().as_string();
                actions::remove::<E, _, _, _>(&service, &host, busy, &id).await;
            });
        }
    };

    // ------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------

    let close = Callback::new(move |_: ()| {
        state.update(|s| s.close_modal());
        import_flow.update(|f| f.cancel());
    });

    let render_modal = {
        let service = service.clone();
        let host = host.clone();
        move || -> AnyView {
            match modal.get() {
                CrudModal::Closed => ().into_any(),
                CrudModal::Create => {
                    let form = RwSignal::new(FormValues::empty(descriptor.create_fields(), FormMode::Create));
                    let service = service.clone();
                    let host = host.clone();
                    let on_submit = Callback::new(move |payload: Payload| {
                        let service = service.clone();
                        let host = host.clone();
                        spawn_local(async move {
                            actions::create::<E, _, _, _>(&service, &host, busy, payload).await;
                        });
                    });
                    view! {
                        <EntityFormModal
                            title=format!("新建{}", descriptor.element_name)
                            form=form
                            busy=is_busy
                            on_submit=on_submit
                            on_cancel=close
                        />
                    }
                    .into_any()
                }
                CrudModal::Update(row) => {
                    let id = row.id().as_string();
                    let form = RwSignal::new(FormValues::from_record(descriptor.update_fields(), &row.to_fields()));
                    let service = service.clone();
                    let host = host.clone();
                    let on_submit = Callback::new(move |payload: Payload| {
                        let service = service.clone();
                        let host = host.clone();
                        let id = id.clone();
                        spawn_local(async move {
                            actions::update::<E, _, _, _>(&service, &host, busy, &id, payload).await;
                        });
                    });
                    view! {
                        <EntityFormModal
                            title=format!("修改{}", descriptor.element_name)
                            form=form
                            busy=is_busy
                            on_submit=on_submit
                            on_cancel=close
                        />
                    }
                    .into_any()
                }
                CrudModal::BatchUpdate(ids) => {
                    let count = ids.len();
                    let form = RwSignal::new(FormValues::empty(descriptor.batch_fields(), FormMode::Batch));
                    let service = service.clone();
                    let host = host.clone();
                    let on_submit = Callback::new(move |payload: Payload| {
                        let service = service.clone();
                        let host = host.clone();
                        let ids = ids.clone();
                        spawn_local(async move {
                            actions::batch_update::<E, _, _, _>(&service, &host, busy, ids, payload).await;
                        });
                    });
                    view! {
                        <EntityFormModal
                            title=format!("批量修改{}（{}条）", descriptor.element_name, count)
                            form=form
                            busy=is_busy
                            on_submit=on_submit
                            on_cancel=close
                        />
                    }
                    .into_any()
                }
                CrudModal::Detail(_) => {
                    let record = Signal::derive(move || detail.record.with(|r| r.as_ref().map(|e| e.to_fields())));
                    view! {
                        <DetailDrawer
                            title=format!("{}详情", descriptor.element_name)
                            fields=descriptor.detail_fields()
                            record=record
                            loading=detail.is_loading
                            error=detail.error
                            on_close=close
                        />
                    }
                    .into_any()
                }
                CrudModal::Import => {
                    let on_parse = {
                        let service = service.clone();
                        let host = host.clone();
                        Callback::new(move |_: ()| {
                            let service = service.clone();
                            let host = host.clone();
                            let files = import_flow.with_untracked(|f| f.begin_parse().unwrap_or_default());
                            spawn_local(async move {
                                let rows = actions::parse_import::<E, _, _, _>(&service, &host, busy, files).await;
                                if let Some(rows) = rows {
                                    if host.is_alive() {
                                        let _ = import_flow.try_update(|f| f.show_preview(rows));
                                    }
                                }
                            });
                        })
                    };
                    let on_commit = {
                        let service = service.clone();
                        let host = host.clone();
                        Callback::new(move |_: ()| {
                            let service = service.clone();
                            let host = host.clone();
                            let rows = import_flow.with_untracked(|f| f.rows().to_vec());
                            spawn_local(async move {
                                actions::commit_import::<E, _, _, _>(&service, &host, busy, &rows).await;
                            });
                        })
                    };
                    let on_template = {
                        let service = service.clone();
                        let host = host.clone();
                        Callback::new(move |_: ()| {
                            let service = service.clone();
                            let host = host.clone();
                            spawn_local(async move {
                                actions::export_template::<E, _, _, _>(&service, &host, busy).await;
                            });
                        })
                    };
                    let on_reject = Callback::new(move |message: String| notices.error(message));
                    view! {
                        <ImportDialog
                            title=format!("导入{}", descriptor.list_name)
                            flow=import_flow
                            columns=descriptor.create_fields()
                            busy=is_busy
                            on_reject=on_reject
                            on_parse=on_parse
                            on_commit=on_commit
                            on_template=on_template
                            on_cancel=close
                        />
                    }
                    .into_any()
                }
            }
        }
    };

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    let columns = Signal::derive(move || {
        state.with(|s| {
            descriptor
                .list_fields()
                .into_iter()
                .filter(|f| s.is_column_visible(f.name))
                .collect::<Vec<_>>()
        })
    });
    let selected_keys = Signal::derive(move || state.with(|s| s.selection.keys().to_vec()));
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));
    let visible_columns = Signal::derive(move || state.with(|s| s.visible_columns.clone()));
    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let active_filters = Signal::derive(move || state.with(|s| s.filters.len()));
    let current_page = Signal::derive(move || state.with(|s| s.pagination.current));
    let current_size = Signal::derive(move || state.with(|s| s.pagination.page_size));
    let read_only = action_config == ActionConfig::READ_ONLY;

    let body = view! {
        {has_query.then(|| view! {
            <QueryPanel
                form=query_form
                on_submit=on_submit_query
                on_reset=on_reset_query
                loading=list.is_loading
                active_count=active_filters
            />
        })}

        <ActionBar
            config=action_config
            selected_count=selected_count
            busy=is_busy
            on_create=Callback::new(move |_: ()| state.update(|s| s.begin_create()))
            on_import=Callback::new(move |_: ()| state.update(|s| s.open_import()))
            on_export=on_export
            on_batch_modify=Callback::new(move |_: ()| state.update(|s| s.begin_batch_modify()))
            on_batch_remove=on_batch_remove
        >
            <ColumnPicker columns=descriptor.list_fields() visible=visible_columns on_toggle=on_toggle_column />
        </ActionBar>

        {move || list.error.get().map(|err| view! {
            <div class="alert alert--error">{err}</div>
        })}

        <DataTable
            columns=columns
            rows=list.items
            loading=list.is_loading
            selected=selected_keys
            on_toggle_row=on_toggle_row
            on_toggle_all=on_toggle_all
            sort=sort
            on_sort=on_sort
            row_actions=row_actions
            no_selection=read_only
        />

        <PaginationControls
            current_page=current_page
            page_size=current_size
            total_count=list.total
            on_change=on_page_change
            page_size_options=app_config.page_size_options.clone()
        />

        {render_modal}

        {move || pending_delete.get().map(|row| {
            let confirm_delete = confirm_delete.clone();
            view! {
                <ModalFrame
                    title=format!("删除{}", descriptor.element_name)
                    on_close=Callback::new(move |_: ()| pending_delete.set(None))
                    width=420
                    footer=move || {
                        let confirm_delete = confirm_delete.clone();
                        view! {
                            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| pending_delete.set(None)>
                                    "取消"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| confirm_delete()
                                    disabled=is_busy
                                >
                                    "确定"
                                </Button>
                            </Flex>
                        }
                    }
                >
                    <p>{format!("确认删除「{}」吗？", row.row_key())}</p>
                </ModalFrame>
            }
        })}
    };

    if embedded {
        view! {
            <section class="crud-section">
                <div class="crud-section__header">
                    <h3>{title}</h3>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {move || list.total.get().to_string()}
                    </Badge>
                </div>
                {body}
            </section>
        }
        .into_any()
    } else {
        view! {
            <PageFrame page_id=page_id(&descriptor.full_name(), category) category=category>
                <div class="page__header">
                    <div class="page__header-left">
                        <h1 class="page__title">{title}</h1>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {move || list.total.get().to_string()}
                        </Badge>
                    </div>
                </div>
                <div class="page__content">{body}</div>
            </PageFrame>
        }
        .into_any()
    }
}
