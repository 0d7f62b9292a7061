use log::{debug, error};

use crate::{
    req::{SensorPoint, SensorRecord},
    service::SensorService,
    state::LoadState,
};

/// Keeps the order of the collection.
pub fn project(records: &[SensorRecord]) -> Vec<SensorPoint> {
    records.iter().map(SensorPoint::from).collect()
}

pub struct SensorMapViewer<S> {
    service: S,
}

impl<S: SensorService> SensorMapViewer<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// One request for the whole collection, settled into a terminal state.
    pub async fn load(&self) -> LoadState<Vec<SensorPoint>> {
        let result = self.service.list().await.map(|records| project(&records));
        match &result {
            Ok(points) => debug!("{} sensor point(s) for the map", points.len()),
            Err(e) => error!("Erro ao carregar os sensores: {e}"),
        }
        LoadState::settle(result)
    }
}
