mod model;
mod state;
mod widget;

pub use model::{CategoryForest, CategoryRecord, ExpansionState, TreeRow};
pub use state::{
    load_tree, reload_tree, save_category, CategoryEditMode, CategoryEditor, CategoryTreeState,
    CategoryWrite,
};
pub use widget::CategoryTreePanel;
