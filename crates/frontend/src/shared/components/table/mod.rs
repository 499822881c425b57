pub mod number_format;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_cell_number;
pub mod table_header_checkbox;

pub use number_format::*;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_cell_number::TableCellNumber;
pub use table_header_checkbox::TableHeaderCheckbox;
