//! Print-to-PDF export.
//!
//! The dashboard does not produce a document itself: it flips the export flag
//! (so the button shows its busy label), waits a beat for that frame to paint,
//! then hands the whole surface to the host's print facility. The flag is held
//! by an [`ExportSession`] guard and released when the guard drops, whether
//! the host call succeeds, fails, or the future is abandoned.

use std::future::Future;

use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;

use crate::core::{platform, timing};

use super::ViewState;

/// Delay between raising the busy flag and invoking the print dialog.
pub const EXPORT_SETTLE_MS: u64 = 100;

/// Something that owns the export-in-progress flag.
pub trait ExportSlot {
    /// Claim the flag; `false` when an export is already running.
    fn try_acquire(&mut self) -> bool;
    fn release(&mut self);
}

impl ExportSlot for ViewState {
    fn try_acquire(&mut self) -> bool {
        self.begin_export()
    }

    fn release(&mut self) {
        self.end_export();
    }
}

impl<T: ExportSlot + ?Sized> ExportSlot for &mut T {
    fn try_acquire(&mut self) -> bool {
        (**self).try_acquire()
    }

    fn release(&mut self) {
        (**self).release();
    }
}

impl ExportSlot for Signal<ViewState> {
    fn try_acquire(&mut self) -> bool {
        self.with_mut(|state| state.begin_export())
    }

    fn release(&mut self) {
        // The dashboard may have unmounted while the dialog was open.
        if let Ok(mut state) = self.try_write() {
            state.end_export();
        }
    }
}

/// Holds the export flag until dropped.
pub struct ExportSession<S: ExportSlot> {
    slot: S,
}

impl<S: ExportSlot> ExportSession<S> {
    /// `None` when another export already holds the flag.
    pub fn begin(mut slot: S) -> Option<Self> {
        // A refused slot must never be wrapped: dropping the session releases.
        if slot.try_acquire() {
            Some(Self { slot })
        } else {
            None
        }
    }
}

impl<S: ExportSlot> Drop for ExportSession<S> {
    fn drop(&mut self) {
        self.slot.release();
    }
}

/// The host's "print current surface" capability.
pub trait PrintHost {
    fn print(&self) -> impl Future<Output = Result<(), String>>;
}

/// The real browser / webview print dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostPrint;

impl PrintHost for HostPrint {
    fn print(&self) -> impl Future<Output = Result<(), String>> {
        platform::print_surface()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Printed,
    /// The host rejected the request. Not surfaced to the user.
    HostFailed(String),
    /// Another export held the flag; nothing happened.
    AlreadyRunning,
}

/// Run one export against `slot`, sleeping `settle_ms` before printing.
pub async fn run_export<S, H>(slot: S, host: &H, settle_ms: u64) -> ExportOutcome
where
    S: ExportSlot,
    H: PrintHost,
{
    let Some(_session) = ExportSession::begin(slot) else {
        debug!("export requested while one is in flight; ignoring");
        return ExportOutcome::AlreadyRunning;
    };

    if settle_ms > 0 {
        timing::sleep_ms(settle_ms).await;
    }

    let platform = platform::Platform::current().label();
    match host.print().await {
        Ok(()) => {
            info!(platform, "print dialog handed off");
            ExportOutcome::Printed
        }
        Err(err) => {
            warn!(platform, %err, "host print failed");
            ExportOutcome::HostFailed(err)
        }
    }
}
