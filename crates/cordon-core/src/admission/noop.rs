use crate::admission::controller::AdmissionController;

/// Admission controller that admits everything and keeps no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AdmissionController for AllowAll {
    #[inline(always)]
    fn allow(&self, _: &str) -> bool {
        true
    }

    #[inline(always)]
    fn record_success(&self, _: &str) {}

    #[inline(always)]
    fn record_failure(&self, _: &str) {}
}
