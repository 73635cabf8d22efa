use crate::schema::appointment;

#[derive(Debug, Clone, PartialEq, Queryable)]
pub struct Appointment {
    pub id: i64,
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Insertable)]
#[diesel(table_name = appointment)]
pub struct NewAppointment {
    pub patient_name: Option<String>,
    pub doctor_name: Option<String>,
    pub date: Option<String>,
}
