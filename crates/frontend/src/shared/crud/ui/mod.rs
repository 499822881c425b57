pub mod action_bar;
pub mod column_picker;
pub mod data_table;
pub mod detail_drawer;
pub mod entity_form_modal;
pub mod field_widget;
pub mod import_dialog;
pub mod page;
pub mod query_panel;
