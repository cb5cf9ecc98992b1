mod discover;
mod model;
mod persist;

pub use discover::find_notebooks;
pub use model::{Cell, CellStats, CellType, Notebook, split_lines};
pub use persist::{SaveMode, backup_path, is_generated, load, output_path, save, to_json};
