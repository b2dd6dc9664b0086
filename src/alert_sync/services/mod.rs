mod advisory_reconciler;

pub use advisory_reconciler::{AdvisoryReconciler, ReconcilePlan};
