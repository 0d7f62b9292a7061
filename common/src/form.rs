use log::warn;

use crate::{req::SensorRecord, schema::Field};

/// Editable copy of a sensor record, holding text exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorForm {
    pub tipo: String,
    pub mac_address: Option<String>,
    pub latitude: String,
    pub longitude: String,
    pub localizacao: String,
    pub responsavel: String,
    pub unidade_medida: String,
    pub status_operacional: Option<bool>,
    pub observacao: Option<String>,
}

impl Default for SensorForm {
    fn default() -> Self {
        Self {
            tipo: String::new(),
            mac_address: None,
            latitude: String::new(),
            longitude: String::new(),
            localizacao: String::new(),
            responsavel: String::new(),
            unidade_medida: String::new(),
            // checkbox starts checked
            status_operacional: Some(true),
            observacao: None,
        }
    }
}

impl SensorForm {
    pub fn from_record(record: &SensorRecord) -> Self {
        Self {
            tipo: record.tipo.map(|k| k.label().to_owned()).unwrap_or_default(),
            mac_address: record.mac_address.clone(),
            latitude: record.latitude.to_string(),
            longitude: record.longitude.to_string(),
            localizacao: record.localizacao.clone(),
            responsavel: record.responsavel.clone(),
            unidade_medida: record.unidade_medida.clone(),
            status_operacional: Some(record.status_operacional),
            observacao: record.observacao.clone(),
        }
    }

    /// Current text of a text-like field. `None` for an absent nullable
    /// field and for the status checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Tipo => Some(&self.tipo),
            Field::MacAddress => self.mac_address.as_deref(),
            Field::Latitude => Some(&self.latitude),
            Field::Longitude => Some(&self.longitude),
            Field::Localizacao => Some(&self.localizacao),
            Field::Responsavel => Some(&self.responsavel),
            Field::UnidadeMedida => Some(&self.unidade_medida),
            Field::Observacao => self.observacao.as_deref(),
            Field::StatusOperacional => None,
        }
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Tipo => self.tipo = value,
            Field::MacAddress => self.mac_address = Some(value),
            Field::Latitude => self.latitude = value,
            Field::Longitude => self.longitude = value,
            Field::Localizacao => self.localizacao = value,
            Field::Responsavel => self.responsavel = value,
            Field::UnidadeMedida => self.unidade_medida = value,
            Field::Observacao => self.observacao = Some(value),
            Field::StatusOperacional => warn!("ignoring text input for {field}"),
        }
    }

    pub fn set_status(&mut self, active: bool) {
        self.status_operacional = Some(active);
    }

    pub fn status(&self) -> bool {
        self.status_operacional.unwrap_or(false)
    }
}
