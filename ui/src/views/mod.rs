mod dashboard;
pub use dashboard::Dashboard;

mod header;
pub use header::DashboardHeader;

mod executive;
pub use executive::ExecutiveSummary;

mod detailed;
pub use detailed::DetailedView;

mod charts;
pub use charts::SavingsChart;

mod sidebar;
pub use sidebar::{DataSources, SprintTimeline};

mod methods;
pub use methods::CalculationMethodsModal;
