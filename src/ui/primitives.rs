//! Canvas-drawn chart primitives
//!
//! Each implements iced's `canvas::Program` directly, takes plain data
//! and knows nothing about the application:
//!
//! - [`BarChart`] - Labelled vertical bar series
//! - [`PieChart`] - Proportional wedges with a legend
//! - [`LineChart`] - Polyline with point markers

pub mod bar_chart;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::{BarChart, BarEntry, view_bar_chart};
pub use line_chart::{LineChart, LinePoint, view_line_chart};
pub use pie_chart::{PieChart, PieSlice, view_pie_chart};
