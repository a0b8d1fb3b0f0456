//! The chart-transform core: pure functions turning the record set into
//! renderer-agnostic geometry. Nothing in this tree touches a widget.

pub mod geometry;
pub mod grouped;
pub mod hierarchical;
pub mod line;
pub mod pie;
pub mod radar;
pub mod scale;

pub use geometry::{ArcSlice, Bar, CurveSegment, PathPoint, RadialPoint};
pub use grouped::{grouped_bars, GroupedBar, DIMMED_OPACITY};
pub use hierarchical::{hierarchical_bars, player_goal_totals};
pub use line::{line_series, monotone_segments, LineSeries};
pub use pie::{donut_slices, pie_slices, DonutSlice};
pub use radar::{default_axes, radar_polygon, RadarAxis};
pub use scale::{BandScale, ColorScale, LinearScale, RadialCurve, RadialScale, ScaleError};
