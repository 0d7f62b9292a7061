//! Declarative constraints a [`SensorForm`] must satisfy before it may become
//! a [`SensorRecord`] and leave the client.

use std::{collections::BTreeMap, fmt};

use crate::{
    form::SensorForm,
    req::{SensorKind, SensorRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Tipo,
    MacAddress,
    Latitude,
    Longitude,
    Localizacao,
    Responsavel,
    UnidadeMedida,
    StatusOperacional,
    Observacao,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Tipo,
        Field::MacAddress,
        Field::Latitude,
        Field::Longitude,
        Field::Localizacao,
        Field::Responsavel,
        Field::UnidadeMedida,
        Field::StatusOperacional,
        Field::Observacao,
    ];

    /// Key of the field in the API's JSON body.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Tipo => "tipo",
            Field::MacAddress => "mac_address",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
            Field::Localizacao => "localizacao",
            Field::Responsavel => "responsavel",
            Field::UnidadeMedida => "unidade_medida",
            Field::StatusOperacional => "status_operacional",
            Field::Observacao => "observacao",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Tipo => "Tipo",
            Field::MacAddress => "Mac Address",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
            Field::Localizacao => "Localização",
            Field::Responsavel => "Responsável",
            Field::UnidadeMedida => "Unidade Medida",
            Field::StatusOperacional => "Status Operacional",
            Field::Observacao => "Observação",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRule {
    pub field: Field,
    pub required: bool,
    pub max_chars: Option<usize>,
}

/// Length and presence rules of the free-text fields.
pub const TEXT_RULES: [TextRule; 5] = [
    TextRule { field: Field::MacAddress, required: false, max_chars: Some(25) },
    TextRule { field: Field::Localizacao, required: true, max_chars: Some(100) },
    TextRule { field: Field::Responsavel, required: true, max_chars: Some(100) },
    TextRule { field: Field::UnidadeMedida, required: true, max_chars: Some(20) },
    TextRule { field: Field::Observacao, required: false, max_chars: None },
];

pub const REQUIRED: &str = "Campo obrigatório";
pub const INVALID_KIND: &str = "Tipo de sensor inválido";

pub fn too_long(max_chars: usize) -> String {
    format!("Deve ter no máximo {max_chars} caracteres")
}

impl TextRule {
    fn check(&self, value: Option<&str>) -> Result<(), String> {
        match value {
            None => {
                if self.required {
                    return Err(REQUIRED.to_owned());
                }
            }
            Some(v) => {
                if self.required && v.trim().is_empty() {
                    return Err(REQUIRED.to_owned());
                }
                if let Some(max) = self.max_chars {
                    if v.chars().count() > max {
                        return Err(too_long(max));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Per-field messages, ordered like the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s): {}", .0.len(), fields_list(.0))]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

fn fields_list(errors: &BTreeMap<Field, String>) -> String {
    errors.keys().map(Field::name).collect::<Vec<_>>().join(", ")
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Checks every rule and, when all pass, builds the record to send.
pub fn validate(form: &SensorForm) -> Result<SensorRecord, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for rule in &TEXT_RULES {
        if let Err(message) = rule.check(form.text(rule.field)) {
            errors.insert(rule.field, message);
        }
    }

    let tipo = match form.tipo.trim() {
        "" => None,
        label => match label.parse::<SensorKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.insert(Field::Tipo, INVALID_KIND);
                None
            }
        },
    };

    let latitude = parse_coordinate(&form.latitude);
    if latitude.is_none() {
        errors.insert(Field::Latitude, "Latitude inválida");
    }
    let longitude = parse_coordinate(&form.longitude);
    if longitude.is_none() {
        errors.insert(Field::Longitude, "Longitude inválida");
    }

    if form.status_operacional.is_none() {
        errors.insert(Field::StatusOperacional, REQUIRED);
    }

    match (latitude, longitude, form.status_operacional) {
        (Some(latitude), Some(longitude), Some(status_operacional)) if errors.is_empty() => {
            Ok(SensorRecord {
                id: None,
                tipo,
                mac_address: form.mac_address.clone(),
                latitude,
                longitude,
                localizacao: form.localizacao.clone(),
                responsavel: form.responsavel.clone(),
                unidade_medida: form.unidade_medida.clone(),
                status_operacional,
                observacao: form.observacao.clone(),
            })
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SensorForm {
        SensorForm {
            tipo: "Umidade".to_owned(),
            mac_address: Some("00:1B:44:11:3A:B7".to_owned()),
            latitude: "-22.9".to_owned(),
            longitude: "-47.06".to_owned(),
            localizacao: "Oficina".to_owned(),
            responsavel: "Carlos".to_owned(),
            unidade_medida: "%".to_owned(),
            status_operacional: Some(false),
            observacao: None,
        }
    }

    #[test]
    fn valid_form_becomes_record() {
        let record = validate(&valid_form()).unwrap();
        assert_eq!(record.tipo, Some(SensorKind::Humidity));
        assert_eq!(record.latitude, -22.9);
        assert_eq!(record.longitude, -47.06);
        assert!(!record.status_operacional);
        assert_eq!(record.id, None);
    }

    #[test]
    fn mac_address_limit() {
        let mut form = valid_form();
        form.mac_address = Some("A".repeat(25));
        assert!(validate(&form).is_ok());

        form.mac_address = Some("A".repeat(26));
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::MacAddress), Some("Deve ter no máximo 25 caracteres"));
        assert_eq!(errors.len(), 1);

        form.mac_address = None;
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        let mut form = valid_form();
        form.unidade_medida = "°".repeat(20);
        assert!(validate(&form).is_ok());
        form.unidade_medida = "°".repeat(21);
        assert!(validate(&form).unwrap_err().contains(Field::UnidadeMedida));
    }

    #[test]
    fn required_text_fields() {
        for field in [Field::Localizacao, Field::Responsavel, Field::UnidadeMedida] {
            let mut form = valid_form();
            form.set_text(field, "   ".to_owned());
            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.get(field), Some(REQUIRED), "{field}");
        }
    }

    #[test]
    fn missing_status_is_rejected() {
        let mut form = valid_form();
        form.status_operacional = None;
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.get(Field::StatusOperacional), Some(REQUIRED));
    }

    #[test]
    fn unparseable_coordinates() {
        for raw in ["", "abc", "12,5", "NaN", "inf", "1e400"] {
            let mut form = valid_form();
            form.latitude = raw.to_owned();
            form.longitude = raw.to_owned();
            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.get(Field::Latitude), Some("Latitude inválida"), "{raw:?}");
            assert_eq!(errors.get(Field::Longitude), Some("Longitude inválida"), "{raw:?}");
        }
    }

    #[test]
    fn type_is_optional_but_must_be_known() {
        let mut form = valid_form();
        form.tipo = String::new();
        assert_eq!(validate(&form).unwrap().tipo, None);

        form.tipo = "Pressao".to_owned();
        assert_eq!(validate(&form).unwrap_err().get(Field::Tipo), Some(INVALID_KIND));
    }

    #[test]
    fn all_errors_are_reported_at_once() {
        let form = SensorForm {
            status_operacional: None,
            ..SensorForm::default()
        };
        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            vec![
                Field::Latitude,
                Field::Longitude,
                Field::Localizacao,
                Field::Responsavel,
                Field::UnidadeMedida,
                Field::StatusOperacional,
            ]
        );
        assert!(errors.to_string().starts_with("6 invalid field(s)"));
    }
}
