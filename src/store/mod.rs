pub mod storage;
pub mod types;

pub use storage::{get_default_data_path, load_festival_data, save_festival_data};
pub use types::{FestivalData, Participant, Performance, ScoreEntry, StoreError};
