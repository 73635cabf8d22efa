use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

use crate::models::appointments::NewAppointment;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub patient_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub doctor_name: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub date: Option<String>,
}

const SCALAR: &str = "a string, number or boolean";

/// Text fields also take numbers and booleans, stored in their JSON spelling.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) => Err(de::Error::invalid_type(de::Unexpected::Seq, &SCALAR)),
        Value::Object(_) => Err(de::Error::invalid_type(de::Unexpected::Map, &SCALAR)),
    }
}

impl From<CreateAppointmentRequest> for NewAppointment {
    fn from(info: CreateAppointmentRequest) -> Self {
        Self {
            patient_name: info.patient_name,
            doctor_name: info.doctor_name,
            date: info.date,
        }
    }
}
