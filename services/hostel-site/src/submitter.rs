//! Inquiry submitter trait and the simulated implementation

use std::time::Duration;

use async_trait::async_trait;
use hostel_content::contact::ContactFields;

/// Delivers a contact inquiry somewhere
#[async_trait]
pub trait InquirySubmitter: Send + Sync + std::fmt::Debug {
    /// Get the submitter type name (e.g. "simulated")
    fn type_name(&self) -> &str;

    /// Submit an inquiry whose required fields are already present
    async fn submit(&self, inquiry: &ContactFields) -> crate::Result<()>;
}

/// Simulated delivery: waits a fixed delay and always succeeds.
///
/// Nothing leaves the process; the inquiry is only logged.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        tracing::debug!("Created SimulatedSubmitter with delay {:?}", delay);
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl InquirySubmitter for SimulatedSubmitter {
    fn type_name(&self) -> &str {
        "simulated"
    }

    async fn submit(&self, inquiry: &ContactFields) -> crate::Result<()> {
        tracing::debug!(
            "Simulating inquiry delivery for {} <{}> ({} chars)",
            inquiry.name,
            inquiry.email,
            inquiry.message.len()
        );
        tokio::time::sleep(self.delay).await;
        tracing::info!("Inquiry from {} accepted (simulated, not delivered)", inquiry.name);
        Ok(())
    }
}
