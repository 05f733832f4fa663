//! Worker that delivers post-created notifications from the outbox.

use quill_core::ports::{JobQueueError, job_handler};

use crate::state::AppState;

/// Attach the notification consumer to the job queue.
pub async fn start(state: &AppState) -> Result<(), JobQueueError> {
    let service = state.notifications.clone();

    state
        .jobs
        .start_worker(job_handler(move |job| {
            let service = service.clone();
            async move { service.handle(job).await }
        }))
        .await?;

    tracing::info!("Notification worker started");
    Ok(())
}
