use contracts::shared::crud::Filters;
use contracts::shared::metadata::RefSpec;
use leptos::prelude::*;
use thaw::*;

use crate::shared::crud::error::FieldErrors;
use crate::shared::crud::hooks::use_ref_options;
use crate::shared::crud::query::{QueryField, QueryForm, QueryKind};
use crate::shared::icons::icon;

/// Collapsible filter panel.
///
/// Submit validates and converts the inputs and emits the full field map;
/// reset clears the inputs and tells the page to refetch unfiltered. No
/// request starts here.
#[component]
pub fn QueryPanel(
    form: RwSignal<QueryForm>,
    on_submit: Callback<Filters>,
    on_reset: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
    /// Number of filters currently applied (badge in the header)
    #[prop(into)]
    active_count: Signal<usize>,
) -> impl IntoView {
    let expanded = RwSignal::new(true);
    let errors = RwSignal::new(FieldErrors::new());

    let submit = move || match form.with_untracked(|f| f.submit()) {
        Ok(filters) => {
            errors.set(FieldErrors::new());
            on_submit.run(filters);
        }
        Err(e) => {
            log::warn!("query form has {} invalid fields", e.len());
            errors.set(e);
        }
    };

    let reset = move || {
        form.update(|f| f.reset());
        errors.set(FieldErrors::new());
        on_reset.run(());
    };

    let fields = form.with_untracked(|f| f.fields().to_vec());

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{icon("chevron-down")}</span>
                    {icon("filter")}
                    <span class="filter-panel__title">"查询条件"</span>
                    {move || {
                        let count = active_count.get();
                        (count > 0).then(|| view! { <span class="filter-panel__badge">{count}</span> })
                    }}
                </div>
            </div>

            <Show when=move || expanded.get()>
                <form
                    class="filter-panel-content"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <div class="query-grid">
                        {fields
                            .iter()
                            .map(|field| view! { <QueryInput field=*field form=form errors=errors /> })
                            .collect_view()}
                    </div>
                    <Flex gap=FlexGap::Small style="margin-top: var(--spacing-sm);">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| submit()
                            disabled=loading
                        >
                            {icon("search")}
                            " 查询"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset()>
                            {icon("refresh")}
                            " 重置"
                        </Button>
                    </Flex>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn QueryInput(field: QueryField, form: RwSignal<QueryForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let name = field.name;
    let placeholder = field
        .placeholder
        .map(str::to_string)
        .unwrap_or_else(|| format!("请输入{}", field.label));
    let value = move || form.with(|f| f.value(name));
    let set = move |ev: leptos::ev::Event| form.update(|f| f.set(name, event_target_value(&ev)));

    let input = match field.kind {
        QueryKind::Text | QueryKind::Integer | QueryKind::Decimal => view! {
            <input class="form__input" placeholder=placeholder prop:value=value on:input=set />
        }
        .into_any(),
        QueryKind::Date => view! {
            <input class="form__input" type="date" prop:value=value on:change=set />
        }
        .into_any(),
        QueryKind::DateRange => view! {
            <div class="date-range">
                <input class="form__input" type="date" prop:value=value on:change=set />
                <span class="date-range__sep">"至"</span>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || form.with(|f| f.value_end(name))
                    on:change=move |ev| form.update(|f| f.set_end(name, event_target_value(&ev)))
                />
            </div>
        }
        .into_any(),
        QueryKind::Select(options) => view! {
            <select class="form__select" prop:value=value on:change=set>
                <option value="">"全部"</option>
                {options
                    .iter()
                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        QueryKind::Reference(spec) => view! { <RefSelect spec=spec form=form name=name /> }.into_any(),
    };

    view! {
        <div class="form__group">
            <Label>{field.label}</Label>
            {input}
            {move || errors.with(|e| e.get(name).map(|msg| view! { <div class="form__error">{msg.to_string()}</div> }))}
        </div>
    }
}

#[component]
fn RefSelect(spec: RefSpec, form: RwSignal<QueryForm>, name: &'static str) -> impl IntoView {
    let options = use_ref_options(spec);

    view! {
        <select
            class="form__select"
            prop:value=move || form.with(|f| f.value(name))
            on:change=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
        >
            <option value="">"全部"</option>
            <For
                each=move || options.get()
                key=|o| o.value.clone()
                children=move |o| {
                    let selected = o.value.clone();
                    view! {
                        <option
                            value=o.value.clone()
                            selected=move || form.with(|f| f.value(name) == selected)
                        >
                            {o.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
