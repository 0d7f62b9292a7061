//! Load, validate-and-submit, and delete of a single sensor. Notification and
//! navigation are left to the page.

use log::{debug, error, info};

use crate::{
    form::SensorForm,
    req::{SensorId, SensorRecord},
    schema::{validate, ValidationErrors},
    service::{SensorService, ServiceError},
};

pub const DELETE_PROMPT: &str = "Tem certeza de que deseja excluir este sensor?";
pub const UPDATED_NOTICE: &str = "Sensor alterado com sucesso!";
pub const DELETED_NOTICE: &str = "Sensor excluído com sucesso!";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// Nothing was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl EditorError {
    /// Messages to show next to the inputs. Empty unless validation failed,
    /// so a rejected request clears what an earlier attempt reported.
    pub fn field_errors(&self) -> ValidationErrors {
        match self {
            EditorError::Invalid(errors) => errors.clone(),
            EditorError::Service(_) => ValidationErrors::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub struct SensorEditor<S> {
    service: S,
    id: SensorId,
}

impl<S: SensorService> SensorEditor<S> {
    pub fn new(service: S, id: SensorId) -> Self {
        Self { service, id }
    }

    pub fn id(&self) -> &SensorId {
        &self.id
    }

    pub async fn load(&self) -> Result<SensorForm, ServiceError> {
        match self.service.fetch(&self.id).await {
            Ok(record) => {
                debug!("loaded sensor {}", self.id);
                Ok(SensorForm::from_record(&record))
            }
            Err(e) => {
                error!("Erro ao obter o sensor {}: {e}", self.id);
                Err(e)
            }
        }
    }

    /// Returns the record that was sent.
    pub async fn submit(&self, form: &SensorForm) -> Result<SensorRecord, EditorError> {
        let record = validate(form).map_err(|errors| {
            debug!("sensor {} not sent: {errors}", self.id);
            errors
        })?;

        if let Err(e) = self.service.update(&self.id, &record).await {
            error!("Erro ao alterar o sensor {}: {e}", self.id);
            return Err(e.into());
        }
        info!("sensor {} updated", self.id);
        Ok(record)
    }

    /// `confirm` is asked [`DELETE_PROMPT`] before anything is sent.
    pub async fn delete<F>(&self, confirm: F) -> Result<DeleteOutcome, ServiceError>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = self.service.delete(&self.id).await {
            error!("Erro ao excluir o sensor {}: {e}", self.id);
            return Err(e);
        }
        info!("sensor {} deleted", self.id);
        Ok(DeleteOutcome::Deleted)
    }
}
