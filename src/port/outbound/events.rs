//! Acquisition progress port.

use crate::domain::{Scene, SceneOutcome};

use super::transfer::TransferProgress;

/// Acquisition progress callbacks. Every method defaults to a no-op.
pub trait AcquisitionEvents: Send + Sync {
    fn scene_started(&self, _index: usize, _total: usize, _scene: &Scene) {}

    fn transfer_started(&self, _scene: &Scene) {}

    fn transfer_progress(&self, _progress: TransferProgress) {}

    fn scene_finished(&self, _outcome: &SceneOutcome) {}
}

/// Events sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentEvents;

impl AcquisitionEvents for SilentEvents {}
