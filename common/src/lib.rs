//! Sensor records as the admin pages see them: the wire model, the form buffer
//! and its validation schema, the service seam and the page workflows.

pub mod editor;
pub mod form;
pub mod map;
pub mod req;
pub mod schema;
pub mod service;
pub mod state;

pub use editor::{DeleteOutcome, EditorError, SensorEditor};
pub use form::SensorForm;
pub use map::SensorMapViewer;
pub use req::{SensorId, SensorKind, SensorPoint, SensorRecord};
pub use schema::{validate, Field, ValidationErrors};
pub use service::{CredentialProvider, Endpoint, SensorService, ServiceError};
pub use state::LoadState;
