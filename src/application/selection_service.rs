// Selection service - the region selector and the cosmetic refresh timestamp
use crate::domain::region::{Region, RegionSelection};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct SelectorState {
    selection: RegionSelection,
    last_updated: DateTime<Utc>,
}

/// Single writer (the selector control), many readers (every widget render).
#[derive(Clone)]
pub struct SelectionService {
    state: Arc<RwLock<SelectorState>>,
}

impl SelectionService {
    pub fn new(initial: Region) -> Self {
        Self {
            state: Arc::new(RwLock::new(SelectorState {
                selection: RegionSelection::new(initial),
                last_updated: Utc::now(),
            })),
        }
    }

    pub async fn current(&self) -> Region {
        self.state.read().await.selection.current()
    }

    pub async fn select(&self, region: Region) -> Region {
        let mut state = self.state.write().await;
        state.selection.select(region);
        tracing::info!("Region selection changed to {}", region);
        region
    }

    pub async fn cycle(&self) -> Region {
        let region = self.state.write().await.selection.cycle();
        tracing::info!("Region selection cycled to {}", region);
        region
    }

    /// Only moves the displayed timestamp; datasets are not reloaded.
    pub async fn refresh(&self) -> DateTime<Utc> {
        let now = Utc::now();
        self.state.write().await.last_updated = now;
        tracing::info!("Dashboard refreshed at {}", now);
        now
    }

    pub async fn last_updated(&self) -> DateTime<Utc> {
        self.state.read().await.last_updated
    }
}
