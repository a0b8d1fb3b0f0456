pub mod donut;
pub mod grouped_bar;
pub mod hierarchical_bar;
pub mod line;
pub mod pie;
pub mod pointer;
pub mod radar;

pub use donut::DonutChart;
pub use grouped_bar::GroupedBarChart;
pub use hierarchical_bar::HierarchicalBarChart;
pub use line::LineChart;
pub use pie::PieChart;
pub use radar::RadarChart;
