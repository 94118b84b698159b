use chrono::{NaiveDate, NaiveDateTime, Utc, Weekday};
use rusqlite::{params, Connection, Row};

use crate::models::hours::weekday_from_str;
use crate::models::{
    Appointment, AppointmentStatus, BusinessHours, ContactMessage, Dentist, ServiceOffering,
};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FMT: &str = "%Y-%m-%d";

fn fmt_dt(dt: &NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

fn parse_dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).unwrap_or_else(|_| Utc::now().naive_utc())
}

// ── Services ──

fn parse_service_row(row: &Row) -> rusqlite::Result<ServiceOffering> {
    let created_at: String = row.get(8)?;
    let updated_at: String = row.get(9)?;
    Ok(ServiceOffering {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price_min: row.get(3)?,
        price_max: row.get(4)?,
        duration_minutes: row.get(5)?,
        active: row.get(6)?,
        display_order: row.get(7)?,
        created_at: parse_dt(&created_at),
        updated_at: parse_dt(&updated_at),
    })
}

const SERVICE_COLS: &str =
    "id, name, description, price_min, price_max, duration_minutes, active, display_order, created_at, updated_at";

pub fn create_service(conn: &Connection, svc: &ServiceOffering) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO services (name, description, price_min, price_max, duration_minutes, active, display_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            svc.name,
            svc.description,
            svc.price_min,
            svc.price_max,
            svc.duration_minutes,
            svc.active,
            svc.display_order,
            fmt_dt(&svc.created_at),
            fmt_dt(&svc.updated_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_active_services(conn: &Connection) -> anyhow::Result<Vec<ServiceOffering>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SERVICE_COLS} FROM services WHERE active = 1 ORDER BY display_order, name"
    ))?;
    let rows = stmt.query_map([], parse_service_row)?;

    let mut services = vec![];
    for row in rows {
        services.push(row?);
    }
    Ok(services)
}

pub fn get_active_service_by_id(
    conn: &Connection,
    id: i64,
) -> anyhow::Result<Option<ServiceOffering>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SERVICE_COLS} FROM services WHERE id = ?1 AND active = 1"
    ))?;
    match stmt.query_row(params![id], parse_service_row) {
        Ok(svc) => Ok(Some(svc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_active_service_by_name(
    conn: &Connection,
    name: &str,
) -> anyhow::Result<Option<ServiceOffering>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {SERVICE_COLS} FROM services WHERE name = ?1 AND active = 1"
    ))?;
    match stmt.query_row(params![name], parse_service_row) {
        Ok(svc) => Ok(Some(svc)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Dentists ──

fn parse_dentist_row(row: &Row) -> rusqlite::Result<Dentist> {
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;
    Ok(Dentist {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        specialty: row.get(3)?,
        bio: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        active: row.get(7)?,
        display_order: row.get(8)?,
        created_at: parse_dt(&created_at),
        updated_at: parse_dt(&updated_at),
    })
}

pub fn create_dentist(conn: &Connection, dentist: &Dentist) -> anyhow::Result<i64> {
    conn.execute(
        "INSERT INTO dentists (first_name, last_name, specialty, bio, email, phone, active, display_order, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            dentist.first_name,
            dentist.last_name,
            dentist.specialty,
            dentist.bio,
            dentist.email,
            dentist.phone,
            dentist.active,
            dentist.display_order,
            fmt_dt(&dentist.created_at),
            fmt_dt(&dentist.updated_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_active_dentists(conn: &Connection) -> anyhow::Result<Vec<Dentist>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, specialty, bio, email, phone, active, display_order, created_at, updated_at
         FROM dentists WHERE active = 1 ORDER BY display_order, last_name",
    )?;
    let rows = stmt.query_map([], parse_dentist_row)?;

    let mut dentists = vec![];
    for row in rows {
        dentists.push(row?);
    }
    Ok(dentists)
}

// ── Business hours ──

pub fn list_business_hours(conn: &Connection) -> anyhow::Result<Vec<BusinessHours>> {
    let mut stmt = conn.prepare(
        "SELECT weekday, morning_open, morning_close, afternoon_open, afternoon_close, closed
         FROM business_hours",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(BusinessHours {
            weekday: row.get(0)?,
            morning_open: row.get(1)?,
            morning_close: row.get(2)?,
            afternoon_open: row.get(3)?,
            afternoon_close: row.get(4)?,
            closed: row.get(5)?,
        })
    })?;

    let mut hours = vec![];
    for row in rows {
        hours.push(row?);
    }
    // Monday-first display order.
    hours.sort_by_key(|h| h.weekday().map(|d| d.num_days_from_monday()).unwrap_or(7));
    Ok(hours)
}

pub fn closed_weekdays(conn: &Connection) -> anyhow::Result<Vec<Weekday>> {
    let mut stmt = conn.prepare("SELECT weekday FROM business_hours WHERE closed = 1")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut days = vec![];
    for row in rows {
        if let Some(day) = weekday_from_str(&row?) {
            days.push(day);
        }
    }
    Ok(days)
}

// ── Appointments ──

const APPOINTMENT_COLS: &str = "id, first_name, last_name, phone, email, requested_date, service_id, service_name, message, status, admin_notes, confirmed_at, created_at, updated_at";

fn parse_appointment_row(row: &Row) -> rusqlite::Result<Appointment> {
    let requested_date: String = row.get(5)?;
    let status: String = row.get(9)?;
    let confirmed_at: Option<String> = row.get(11)?;
    let created_at: String = row.get(12)?;
    let updated_at: String = row.get(13)?;
    Ok(Appointment {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
        requested_date: NaiveDate::parse_from_str(&requested_date, DATE_FMT)
            .unwrap_or_else(|_| Utc::now().date_naive()),
        service_id: row.get(6)?,
        service_name: row.get(7)?,
        message: row.get(8)?,
        status: AppointmentStatus::from_str(&status),
        admin_notes: row.get(10)?,
        confirmed_at: confirmed_at.as_deref().map(parse_dt),
        created_at: parse_dt(&created_at),
        updated_at: parse_dt(&updated_at),
    })
}

pub fn create_appointment(conn: &Connection, appt: &Appointment) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO appointments (id, first_name, last_name, phone, email, requested_date, service_id, service_name, message, status, admin_notes, confirmed_at, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            appt.id,
            appt.first_name,
            appt.last_name,
            appt.phone,
            appt.email,
            appt.requested_date.format(DATE_FMT).to_string(),
            appt.service_id,
            appt.service_name,
            appt.message,
            appt.status.as_str(),
            appt.admin_notes,
            appt.confirmed_at.as_ref().map(fmt_dt),
            fmt_dt(&appt.created_at),
            fmt_dt(&appt.updated_at),
        ],
    )?;
    Ok(())
}

pub fn get_appointment(conn: &Connection, id: &str) -> anyhow::Result<Option<Appointment>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {APPOINTMENT_COLS} FROM appointments WHERE id = ?1"
    ))?;
    match stmt.query_row(params![id], parse_appointment_row) {
        Ok(appt) => Ok(Some(appt)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn list_appointments(
    conn: &Connection,
    status: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<Appointment>> {
    let mut appointments = vec![];

    match status {
        Some(status) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {APPOINTMENT_COLS} FROM appointments WHERE status = ?1 ORDER BY created_at DESC LIMIT ?2"
            ))?;
            let rows = stmt.query_map(params![status, limit], parse_appointment_row)?;
            for row in rows {
                appointments.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {APPOINTMENT_COLS} FROM appointments ORDER BY created_at DESC LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![limit], parse_appointment_row)?;
            for row in rows {
                appointments.push(row?);
            }
        }
    }

    Ok(appointments)
}

pub fn update_appointment_status(
    conn: &Connection,
    id: &str,
    status: AppointmentStatus,
    admin_notes: Option<&str>,
) -> anyhow::Result<bool> {
    let now = fmt_dt(&Utc::now().naive_utc());
    // Moving to confirmed stamps the confirmation time.
    let confirmed_at = if status == AppointmentStatus::Confirmed {
        Some(now.clone())
    } else {
        None
    };

    let updated = conn.execute(
        "UPDATE appointments
         SET status = ?1,
             admin_notes = COALESCE(?2, admin_notes),
             confirmed_at = COALESCE(?3, confirmed_at),
             updated_at = ?4
         WHERE id = ?5",
        params![status.as_str(), admin_notes, confirmed_at, now, id],
    )?;
    Ok(updated > 0)
}

// ── Contact messages ──

fn parse_contact_row(row: &Row) -> rusqlite::Result<ContactMessage> {
    let created_at: String = row.get(9)?;
    let updated_at: String = row.get(10)?;
    Ok(ContactMessage {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        subject: row.get(5)?,
        message: row.get(6)?,
        read: row.get(7)?,
        processed: row.get(8)?,
        created_at: parse_dt(&created_at),
        updated_at: parse_dt(&updated_at),
    })
}

pub fn create_contact(conn: &Connection, msg: &ContactMessage) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO contact_messages (id, first_name, last_name, email, phone, subject, message, read, processed, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            msg.id,
            msg.first_name,
            msg.last_name,
            msg.email,
            msg.phone,
            msg.subject,
            msg.message,
            msg.read,
            msg.processed,
            fmt_dt(&msg.created_at),
            fmt_dt(&msg.updated_at),
        ],
    )?;
    Ok(())
}

pub fn list_contacts(conn: &Connection, limit: i64) -> anyhow::Result<Vec<ContactMessage>> {
    let mut stmt = conn.prepare(
        "SELECT id, first_name, last_name, email, phone, subject, message, read, processed, created_at, updated_at
         FROM contact_messages ORDER BY created_at DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], parse_contact_row)?;

    let mut messages = vec![];
    for row in rows {
        messages.push(row?);
    }
    Ok(messages)
}

pub fn mark_contact_read(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let now = fmt_dt(&Utc::now().naive_utc());
    let updated = conn.execute(
        "UPDATE contact_messages SET read = 1, updated_at = ?1 WHERE id = ?2",
        params![now, id],
    )?;
    Ok(updated > 0)
}
