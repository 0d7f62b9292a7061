#![allow(dead_code)]

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use async_trait::async_trait;
use sensor_common::{
    service::{authorization_header, Endpoint, StaticToken},
    SensorId, SensorRecord, SensorService, ServiceError,
};
use serde_json::{json, Value};

/// A request as it would have left the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub authorization: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct Inner {
    records: RefCell<BTreeMap<SensorId, Value>>,
    order: RefCell<Vec<SensorId>>,
    calls: RefCell<Vec<Call>>,
    fail_with: RefCell<Option<ServiceError>>,
}

/// In-memory API. Stores raw JSON so decoding runs exactly as it would on a
/// real response.
#[derive(Clone)]
pub struct FakeService {
    inner: Rc<Inner>,
    credentials: StaticToken,
}

impl Default for FakeService {
    fn default() -> Self {
        Self::with_token(Some("test-token"))
    }
}

impl FakeService {
    pub fn with_token(token: Option<&str>) -> Self {
        Self {
            inner: Rc::default(),
            credentials: StaticToken(token.map(str::to_owned)),
        }
    }

    pub fn insert(&self, id: &str, body: Value) {
        let id = SensorId::new(id);
        let mut order = self.inner.order.borrow_mut();
        if !order.contains(&id) {
            order.push(id.clone());
        }
        self.inner.records.borrow_mut().insert(id, body);
    }

    pub fn fail_with(&self, error: ServiceError) {
        *self.inner.fail_with.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.borrow().clone()
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.inner.records.borrow().get(&SensorId::new(id)).cloned()
    }

    fn send(&self, endpoint: Endpoint, body: Option<Value>) -> Result<(), ServiceError> {
        let authorization = authorization_header(&self.credentials)?;
        self.inner.calls.borrow_mut().push(Call {
            method: endpoint.method().as_str(),
            path: endpoint.path(),
            authorization,
            body,
        });
        match self.inner.fail_with.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn lookup(&self, id: &SensorId) -> Result<Value, ServiceError> {
        self.inner
            .records
            .borrow()
            .get(id)
            .cloned()
            .ok_or(ServiceError::Status(404))
    }
}

#[async_trait(?Send)]
impl SensorService for FakeService {
    async fn fetch(&self, id: &SensorId) -> Result<SensorRecord, ServiceError> {
        self.send(Endpoint::Detail(id.clone()), None)?;
        Ok(serde_json::from_value(self.lookup(id)?)?)
    }

    async fn list(&self) -> Result<Vec<SensorRecord>, ServiceError> {
        self.send(Endpoint::List, None)?;
        let records = self.inner.records.borrow();
        let body: Vec<Value> = self
            .inner
            .order
            .borrow()
            .iter()
            .filter_map(|id| records.get(id).cloned())
            .collect();
        Ok(serde_json::from_value(Value::Array(body))?)
    }

    async fn update(&self, id: &SensorId, record: &SensorRecord) -> Result<(), ServiceError> {
        let body = serde_json::to_value(record)?;
        self.send(Endpoint::Update(id.clone()), Some(body.clone()))?;
        self.lookup(id)?;
        self.inner.records.borrow_mut().insert(id.clone(), body);
        Ok(())
    }

    async fn delete(&self, id: &SensorId) -> Result<(), ServiceError> {
        self.send(Endpoint::Delete(id.clone()), None)?;
        self.lookup(id)?;
        self.inner.records.borrow_mut().remove(id);
        self.inner.order.borrow_mut().retain(|k| k != id);
        Ok(())
    }
}

pub fn lab_sensor() -> Value {
    json!({
        "tipo": "Temperatura",
        "mac_address": "AA:BB:CC",
        "latitude": -23.5,
        "longitude": -46.6,
        "localizacao": "Lab 1",
        "responsavel": "Ana",
        "unidade_medida": "°C",
        "status_operacional": true,
        "observacao": null
    })
}

pub fn sensor_at(localizacao: &str, tipo: &str, latitude: f64, longitude: f64) -> Value {
    let mut body = lab_sensor();
    body["localizacao"] = json!(localizacao);
    body["tipo"] = json!(tipo);
    body["latitude"] = json!(latitude);
    body["longitude"] = json!(longitude);
    body
}
