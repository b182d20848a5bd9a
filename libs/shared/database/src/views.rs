use std::collections::HashMap;
use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

/// Rendered views that depend on the entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Patients,
    Doctors,
    Appointments,
    Dashboard,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Patients => "/patients",
            View::Doctors => "/doctors",
            View::Appointments => "/appointments",
            View::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Default)]
struct ViewState {
    generation: u64,
    cached: Option<CachedView>,
}

#[derive(Debug, Clone)]
struct CachedView {
    generation: u64,
    body: Value,
    rendered_at: DateTime<Utc>,
}

/// Holds the last rendering of each view until a mutation marks it stale.
///
/// Every invalidation bumps the view's generation. A rendering is only kept if
/// the generation did not move while it was being produced.
#[derive(Debug, Default)]
pub struct ViewCache {
    views: RwLock<HashMap<View, ViewState>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached rendering of `view`, or runs `render` when the view
    /// is stale or was never rendered.
    pub async fn get_or_render<F, Fut, E>(&self, view: View, render: F) -> Result<Value, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let generation = {
            let views = self.views.read().await;
            match views.get(&view) {
                Some(state) => {
                    if let Some(cached) = state.cached.as_ref().filter(|c| c.generation == state.generation) {
                        debug!("Serving cached view {} rendered at {}", view, cached.rendered_at);
                        return Ok(cached.body.clone());
                    }
                    state.generation
                }
                None => 0,
            }
        };

        debug!("Rendering view {}", view);
        let body = render().await?;

        let mut views = self.views.write().await;
        let state = views.entry(view).or_default();
        if state.generation == generation {
            state.cached = Some(CachedView {
                generation,
                body: body.clone(),
                rendered_at: Utc::now(),
            });
        }

        Ok(body)
    }

    /// Marks the given views stale so the next read re-renders them.
    pub async fn invalidate(&self, targets: &[View]) {
        let mut views = self.views.write().await;
        for view in targets {
            let state = views.entry(*view).or_default();
            state.generation += 1;
            debug!("Invalidated view {} (generation {})", view, state.generation);
        }
    }

    pub async fn is_fresh(&self, view: View) -> bool {
        let views = self.views.read().await;
        views
            .get(&view)
            .and_then(|state| state.cached.as_ref().map(|c| c.generation == state.generation))
            .unwrap_or(false)
    }
}
