mod state;
mod widget;

pub use state::{
    load_category_options, load_products, open_product_editor, refresh_products, save_product,
    select_category, ProductEditMode, ProductEditor, ProductListState, ProductWrite,
    ProductsRequest,
};
pub use widget::ProductsPanel;
