//! Dashboard view-state controller and the export session built on it.

mod state;
pub use state::{DashboardView, ViewState};

mod export;
pub use export::{
    run_export, ExportOutcome, ExportSession, ExportSlot, HostPrint, PrintHost, EXPORT_SETTLE_MS,
};
