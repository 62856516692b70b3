//! Resolving a sale into the data printed on its invoice.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;

use crate::error::ProviderError;
use crate::invoice::{Customer, InvoiceData, Vehicle};

/// Something that can assemble a complete [`InvoiceData`] for a sale.
///
/// Implementations return an error rather than partial data when
/// the customer or vehicle cannot be found.
pub trait InvoiceSource {
    fn invoice(&self, sale_id: &str) -> Result<InvoiceData, ProviderError>;
}

/// One row of the sales listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleSummary {
    pub sale_id: String,
    pub date: String,
    pub price: f64,
    /// "Make Model"
    pub vehicle: String,
    /// "First Last"
    pub customer: String,
}

// Customer and vehicle are outer-joined so a dangling reference is
// reported as such instead of looking like a missing sale.
const INVOICE_SQL: &str = "
    SELECT
        s.id, s.date, s.sale_price,
        c.id, c.first_name, c.last_name,
        v.id, v.vin, v.make, v.model, v.year, v.trim,
        v.odometer, v.transmission, v.fuel_type
    FROM Sales s
    LEFT JOIN Customers c ON s.customer_id = c.id
    LEFT JOIN Vehicles v ON s.vehicle_id = v.id
    WHERE s.id = ?1
";

const RECENT_SALES_SQL: &str = "
    SELECT s.id, s.date, s.sale_price,
           v.make, v.model,
           c.first_name, c.last_name
    FROM Sales s
    JOIN Vehicles v ON s.vehicle_id = v.id
    JOIN Customers c ON s.customer_id = c.id
    ORDER BY s.date DESC, s.id
    LIMIT ?1
";

struct InvoiceRow {
    sale_id: String,
    date: String,
    sale_price: f64,
    customer: Option<Customer>,
    vehicle: Option<VehicleRow>,
}

struct VehicleRow {
    vin: String,
    make: String,
    model: String,
    year: i64,
    trim: Option<String>,
    odometer: i64,
    transmission: String,
    fuel_type: String,
}

impl VehicleRow {
    fn into_vehicle(self) -> Result<Vehicle, ProviderError> {
        let year = u16::try_from(self.year).map_err(|_| ProviderError::InvalidField {
            field: "year",
            value: self.year.to_string(),
        })?;
        let odometer = u32::try_from(self.odometer).map_err(|_| ProviderError::InvalidField {
            field: "odometer",
            value: self.odometer.to_string(),
        })?;
        Ok(Vehicle {
            vin: self.vin,
            make: self.make,
            model: self.model,
            year,
            trim: self.trim,
            odometer,
            transmission: self.transmission,
            fuel_type: self.fuel_type,
        })
    }
}

/// Invoice source backed by the dealership's SQLite database.
pub struct SqliteInvoiceSource {
    conn: Connection,
}

impl SqliteInvoiceSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        Ok(Self::from_connection(Connection::open(path)?))
    }

    pub fn from_connection(conn: Connection) -> Self {
        SqliteInvoiceSource { conn }
    }

    /// The most recent sales, newest first.
    pub fn recent_sales(&self, limit: usize) -> Result<Vec<SaleSummary>, ProviderError> {
        let mut stmt = self.conn.prepare(RECENT_SALES_SQL)?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], |row| {
            let make: String = row.get(3)?;
            let model: String = row.get(4)?;
            let first_name: String = row.get(5)?;
            let last_name: String = row.get(6)?;
            Ok(SaleSummary {
                sale_id: row.get(0)?,
                date: row.get(1)?,
                price: row.get(2)?,
                vehicle: format!("{} {}", make, model),
                customer: format!("{} {}", first_name, last_name),
            })
        })?;
        let sales = rows.collect::<Result<Vec<_>, _>>()?;
        log::debug!("loaded {} recent sales", sales.len());
        Ok(sales)
    }

    fn invoice_row(&self, sale_id: &str) -> Result<Option<InvoiceRow>, ProviderError> {
        let row = self
            .conn
            .query_row(INVOICE_SQL, params![sale_id], |row| {
                let customer_id: Option<String> = row.get(3)?;
                let customer = match customer_id {
                    Some(id) => Some(Customer {
                        id,
                        first_name: row.get(4)?,
                        last_name: row.get(5)?,
                    }),
                    None => None,
                };
                let vehicle_id: Option<String> = row.get(6)?;
                let vehicle = match vehicle_id {
                    Some(_) => Some(VehicleRow {
                        vin: row.get(7)?,
                        make: row.get(8)?,
                        model: row.get(9)?,
                        year: row.get(10)?,
                        trim: row.get(11)?,
                        odometer: row.get(12)?,
                        transmission: row.get(13)?,
                        fuel_type: row.get(14)?,
                    }),
                    None => None,
                };
                Ok(InvoiceRow {
                    sale_id: row.get(0)?,
                    date: row.get(1)?,
                    sale_price: row.get(2)?,
                    customer,
                    vehicle,
                })
            })
            .optional()?;
        Ok(row)
    }
}

impl InvoiceSource for SqliteInvoiceSource {
    fn invoice(&self, sale_id: &str) -> Result<InvoiceData, ProviderError> {
        let row = self
            .invoice_row(sale_id)?
            .ok_or_else(|| ProviderError::SaleNotFound(sale_id.to_string()))?;
        let customer = row
            .customer
            .ok_or_else(|| ProviderError::CustomerNotFound(sale_id.to_string()))?;
        let vehicle = row
            .vehicle
            .ok_or_else(|| ProviderError::VehicleNotFound(sale_id.to_string()))?
            .into_vehicle()?;
        log::debug!("resolved sale {} for customer {}", row.sale_id, customer.id);
        Ok(InvoiceData {
            sale_id: row.sale_id,
            date: row.date,
            sale_price: row.sale_price,
            customer,
            vehicle,
        })
    }
}
