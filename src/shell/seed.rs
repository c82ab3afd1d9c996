use rand::Rng;

use crate::modules::streams::core::ports::{StoreError, StreamStore};
use crate::modules::streams::core::stream::{NewStream, Stream};

pub const MAX_DEMO_DIMENSION: u32 = 1000;

/// Demo record with no elements and random dimensions in `1..=MAX_DEMO_DIMENSION`.
pub fn demo_stream() -> NewStream {
    let mut rng = rand::thread_rng();
    NewStream {
        width: f64::from(rng.gen_range(1..=MAX_DEMO_DIMENSION)),
        height: f64::from(rng.gen_range(1..=MAX_DEMO_DIMENSION)),
        elements: vec![],
    }
}

pub async fn seed_demo_stream(store: &dyn StreamStore) -> Result<Stream, StoreError> {
    let created = store.create(demo_stream()).await?;
    tracing::info!(
        id = %created.id,
        width = created.width,
        height = created.height,
        "seeded demo stream"
    );
    Ok(created)
}
