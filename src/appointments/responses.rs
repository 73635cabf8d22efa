use serde::{Deserialize, Serialize};

use crate::models::appointments::Appointment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentItem {
    pub id: i64,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
}

impl From<Appointment> for AppointmentItem {
    fn from(data: Appointment) -> Self {
        Self {
            id: data.id,
            patient_name: data.patient_name,
            doctor_name: data.doctor_name,
            date: data.date,
        }
    }
}
