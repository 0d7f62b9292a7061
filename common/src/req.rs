// keep in sync with the serializer of the remote sensor API
use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_aux::field_attributes::{deserialize_number_from_string, deserialize_string_from_number};

/// Server-assigned identifier. Opaque to the client; the API may send it as a
/// number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SensorId(String);

impl SensorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SensorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_string_from_number(deserializer).map(SensorId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SensorKind {
    #[serde(rename = "Temperatura")]
    Temperature,
    #[serde(rename = "Contador")]
    Counter,
    #[serde(rename = "Luminosidade")]
    Luminosity,
    #[serde(rename = "Umidade")]
    Humidity,
}

impl SensorKind {
    pub const ALL: [SensorKind; 4] = [
        SensorKind::Temperature,
        SensorKind::Counter,
        SensorKind::Luminosity,
        SensorKind::Humidity,
    ];

    /// Wire label, also shown in the type selector.
    pub fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "Temperatura",
            SensorKind::Counter => "Contador",
            SensorKind::Luminosity => "Luminosidade",
            SensorKind::Humidity => "Umidade",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sensor type `{0}`")]
pub struct UnknownSensorKind(pub String);

impl FromStr for SensorKind {
    type Err = UnknownSensorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SensorKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| UnknownSensorKind(s.to_owned()))
    }
}

// "" and null both mean "no type selected"
fn deserialize_kind<'de, D>(deserializer: D) -> Result<Option<SensorKind>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(label) => label.parse().map(Some).map_err(de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SensorRecord {
    // travels in the url, never in the body
    #[serde(default, skip_serializing)]
    pub id: Option<SensorId>,
    #[serde(default, deserialize_with = "deserialize_kind")]
    pub tipo: Option<SensorKind>,
    #[serde(default)]
    pub mac_address: Option<String>, // max 25 chars
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub latitude: f64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub longitude: f64,
    pub localizacao: String,    // max 100 chars
    pub responsavel: String,    // max 100 chars
    pub unidade_medida: String, // max 20 chars
    pub status_operacional: bool,
    #[serde(default)]
    pub observacao: Option<String>,
}

/// What the map renderer gets for each sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub tipo: Option<SensorKind>,
    pub localizacao: String,
}

impl From<&SensorRecord> for SensorPoint {
    fn from(record: &SensorRecord) -> Self {
        Self {
            latitude: record.latitude,
            longitude: record.longitude,
            tipo: record.tipo,
            localizacao: record.localizacao.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lab_record() -> serde_json::Value {
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

    #[test]
    fn decodes_all_nine_fields() {
        let record: SensorRecord = serde_json::from_value(lab_record()).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.tipo, Some(SensorKind::Temperature));
        assert_eq!(record.mac_address.as_deref(), Some("AA:BB:CC"));
        assert_eq!(record.latitude, -23.5);
        assert_eq!(record.longitude, -46.6);
        assert_eq!(record.localizacao, "Lab 1");
        assert_eq!(record.responsavel, "Ana");
        assert_eq!(record.unidade_medida, "°C");
        assert!(record.status_operacional);
        assert_eq!(record.observacao, None);
    }

    #[test]
    fn numeric_id_and_string_coordinates_are_accepted() {
        let mut value = lab_record();
        value["id"] = json!(42);
        value["latitude"] = json!("-23.550520");
        let record: SensorRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, Some(SensorId::new("42")));
        assert_eq!(record.latitude, -23.55052);
    }

    #[test]
    fn empty_type_is_absent() {
        let mut value = lab_record();
        value["tipo"] = json!("");
        let record: SensorRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.tipo, None);
    }

    #[test]
    fn unknown_type_fails_to_decode() {
        let mut value = lab_record();
        value["tipo"] = json!("Pressao");
        assert!(serde_json::from_value::<SensorRecord>(value).is_err());
    }

    #[test]
    fn unexpected_and_missing_keys_fail_to_decode() {
        let mut value = lab_record();
        value["bateria"] = json!(80);
        assert!(serde_json::from_value::<SensorRecord>(value).is_err());

        let mut value = lab_record();
        value.as_object_mut().unwrap().remove("responsavel");
        assert!(serde_json::from_value::<SensorRecord>(value).is_err());
    }

    #[test]
    fn id_is_not_serialized() {
        let mut value = lab_record();
        value["id"] = json!("7");
        let record: SensorRecord = serde_json::from_value(value).unwrap();
        let body = serde_json::to_value(&record).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body, lab_record());
    }

    #[test]
    fn kind_labels_parse_back() {
        for kind in SensorKind::ALL {
            assert_eq!(kind.label().parse::<SensorKind>(), Ok(kind));
        }
        assert!("temperatura".parse::<SensorKind>().is_err());
    }
}
