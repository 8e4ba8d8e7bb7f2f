use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::modules::stats::application::domain::entities::Repository;
use crate::modules::stats::application::ports::outgoing::ExternalApiError;

/// Outbound calls allowed in flight per aggregate request.
pub const MAX_IN_FLIGHT: usize = 15;

/// Runs `call` once per non-fork repository with at most `limit` calls in
/// flight and returns the successful results in completion order.
///
/// A permit is held only while the call's future runs. Failed repositories
/// are logged and left out. Dropping the returned future aborts every
/// outstanding task.
pub async fn fan_out<F, Fut, T>(repositories: Vec<Repository>, limit: usize, call: F) -> Vec<T>
where
    F: Fn(Repository) -> Fut,
    Fut: Future<Output = Result<T, ExternalApiError>> + Send + 'static,
    T: Send + 'static,
{
    let permits = Arc::new(Semaphore::new(limit));
    let mut tasks = JoinSet::new();

    for repository in repositories.into_iter().filter(|r| !r.fork) {
        let name = repository.name.clone();
        let permits = Arc::clone(&permits);
        let pending = call(repository);

        tasks.spawn(async move {
            let outcome = match permits.acquire_owned().await {
                Ok(_permit) => pending.await,
                Err(closed) => Err(ExternalApiError::Transport(closed.to_string())),
            };
            (name, outcome)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    let mut skipped = 0usize;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((_, Ok(value))) => results.push(value),
            Ok((name, Err(e))) => {
                skipped += 1;
                warn!(repository = %name, error = %e, "Skipping repository");
            }
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "Fan-out task did not complete");
            }
        }
    }

    debug!(succeeded = results.len(), skipped, "Repository fan-out finished");
    results
}
