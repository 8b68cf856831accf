pub mod formatter;

pub use formatter::{
    format_average, format_overview, format_participant_list, format_performance_list,
    format_results, should_use_colors,
};
