use anyhow::Context;
use diesel::prelude::*;

use crate::{
    database::get_db_conn,
    models::appointments::{Appointment, NewAppointment},
    schema::appointment,
    DbPool,
};

/// Persistence operations the HTTP layer needs.
///
/// Implementations are synchronous; callers run them on a blocking pool.
pub trait AppointmentStore: Send + Sync {
    /// Inserts a row and returns it with the id the store assigned.
    fn create(&self, data: NewAppointment) -> anyhow::Result<Appointment>;

    /// Every stored row, oldest first.
    fn list(&self) -> anyhow::Result<Vec<Appointment>>;

    /// Removes the row with `id`, returning how many rows went away.
    ///
    /// An unknown id removes nothing and is not an error.
    fn delete(&self, id: i64) -> anyhow::Result<usize>;

    /// Fails when the store cannot answer a trivial query.
    fn check(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct SqliteAppointmentStore {
    pool: DbPool,
}

impl SqliteAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AppointmentStore for SqliteAppointmentStore {
    fn create(&self, data: NewAppointment) -> anyhow::Result<Appointment> {
        let mut conn = get_db_conn(&self.pool)?;
        diesel::insert_into(appointment::table)
            .values(&data)
            .get_result::<Appointment>(&mut conn)
            .context("DB error")
    }

    fn list(&self) -> anyhow::Result<Vec<Appointment>> {
        let mut conn = get_db_conn(&self.pool)?;
        appointment::table
            .order(appointment::id.asc())
            .load::<Appointment>(&mut conn)
            .context("DB error")
    }

    fn delete(&self, id: i64) -> anyhow::Result<usize> {
        let mut conn = get_db_conn(&self.pool)?;
        diesel::delete(appointment::table.find(id))
            .execute(&mut conn)
            .context("DB error")
    }

    fn check(&self) -> anyhow::Result<()> {
        let mut conn = get_db_conn(&self.pool)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .context("DB error")?;
        Ok(())
    }
}
