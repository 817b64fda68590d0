use std::{future::Future, sync::Arc};

use crate::{
    catalog::{Catalog, CatalogError},
    types::Track,
};

/// Runs one lookup per key, at most `concurrency` at a time, and concatenates the
/// results in key order regardless of which response arrives first.
///
/// A failed lookup, or a task that panicked, contributes nothing.
pub async fn fan_out<C, F, Fut>(
    catalog: &Arc<C>,
    keys: &[String],
    concurrency: usize,
    lookup: F,
) -> Vec<Track>
where
    C: Catalog + ?Sized + 'static,
    F: Fn(Arc<C>, String) -> Fut,
    Fut: Future<Output = Result<Vec<Track>, CatalogError>> + Send + 'static,
{
    let mut collected: Vec<Track> = Vec::new();

    for chunk in keys.chunks(concurrency.max(1)) {
        let mut handles = Vec::with_capacity(chunk.len());
        for key in chunk {
            handles.push(tokio::spawn(lookup(Arc::clone(catalog), key.clone())));
        }

        for handle in handles {
            if let Ok(Ok(tracks)) = handle.await {
                collected.extend(tracks);
            }
        }
    }

    collected
}
