//! Two-phase import dialog: attach spreadsheets, then preview the parsed rows

use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

use crate::shared::crud::format::format_value;
use crate::shared::crud::import_flow::{ImportFlow, ImportStage};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

pub type BrowserImportFlow = ImportFlow<web_sys::File>;

/// Renders the flow; the page performs the service calls behind the callbacks.
#[component]
pub fn ImportDialog(
    #[prop(into)] title: String,
    flow: RwSignal<BrowserImportFlow, LocalStorage>,
    /// Preview columns
    columns: Vec<&'static FieldMetadata>,
    #[prop(into)] busy: Signal<bool>,
    /// A file was refused (wrong extension)
    on_reject: Callback<String>,
    on_parse: Callback<()>,
    on_commit: Callback<()>,
    on_template: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);
    let stage = Signal::derive(move || flow.with(|f| f.stage()));

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                let Some(file) = list.item(i) else { continue };
                let name = file.name();
                let result = flow.try_update(|f| f.attach(name.clone(), file));
                if let Some(Err(e)) = result {
                    log::warn!("import: rejected {}", name);
                    on_reject.run(e.to_string());
                }
            }
        }
        input.set_value("");
    };

    let footer = move || {
        view! {
            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_template.run(())>
                    {icon("download")}
                    " 下载模板"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    "取消"
                </Button>
                {move || match stage.get() {
                    ImportStage::Upload => view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_parse.run(())
                            disabled=busy
                        >
                            "下一步"
                        </Button>
                    }
                    .into_any(),
                    ImportStage::Preview => view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_commit.run(())
                            disabled=busy
                        >
                            "确认导入"
                        </Button>
                    }
                    .into_any(),
                }}
            </Flex>
        }
    };

    let upload = move || {
        view! {
            <div class="import-upload">
                <label class="import-upload__drop">
                    {icon("upload")}
                    <span>"点击选择文件（支持 .xls / .xlsx，可多选）"</span>
                    <input
                        type="file"
                        multiple=true
                        accept=".xls,.xlsx"
                        style="display: none;"
                        on:change=on_files
                    />
                </label>
                <ul class="import-upload__files">
                    {move || {
                        flow.with(|f| {
                            f.files()
                                .iter()
                                .enumerate()
                                .map(|(index, file)| {
                                    view! {
                                        <li class="import-upload__file">
                                            <span>{file.name.clone()}</span>
                                            <a
                                                href="#"
                                                class="row-action row-action--danger"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    flow.update(|f| f.remove(index));
                                                }
                                            >
                                                {icon("x")}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                </ul>
            </div>
        }
    };

    let preview = move || {
        let (rows, errors) = flow.with(|f| (f.rows().to_vec(), f.error_count()));
        let total = rows.len();
        view! {
            <div class="import-preview">
                <Flex gap=FlexGap::Small style="margin-bottom: var(--spacing-sm);">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {format!("共 {} 行", total)}
                    </Badge>
                    {(errors > 0).then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                            {format!("{} 行有错误，将被跳过", errors)}
                        </Badge>
                    })}
                </Flex>
                <div class="table-wrapper import-preview__table">
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=50.0>"#"</TableHeaderCell>
                                {columns
                                    .get_value()
                                    .into_iter()
                                    .map(|field| view! {
                                        <TableHeaderCell resizable=false min_width=100.0>{field.label}</TableHeaderCell>
                                    })
                                    .collect_view()}
                                <TableHeaderCell resizable=false min_width=160.0>"错误信息"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows
                                .into_iter()
                                .enumerate()
                                .map(|(index, row)| {
                                    let class = if row.has_error() { "import-row import-row--error" } else { "import-row" };
                                    view! {
                                        <TableRow class=class>
                                            <TableCell>{index + 1}</TableCell>
                                            {columns
                                                .get_value()
                                                .into_iter()
                                                .map(|field| {
                                                    let text = format_value(field, row.value(field.name));
                                                    view! {
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {text}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view()}
                                            <TableCell>
                                                <span class="import-row__error">{row.err_msg.clone().unwrap_or_default()}</span>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        }
    };

    view! {
        <ModalFrame title=title on_close=on_cancel close_on_overlay=false width=900 footer=footer>
            {move || match stage.get() {
                ImportStage::Upload => upload().into_any(),
                ImportStage::Preview => preview().into_any(),
            }}
        </ModalFrame>
    }
}
