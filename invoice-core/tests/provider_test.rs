use invoice_core::{build_invoice_pdf, InvoiceSource, ProviderError, SqliteInvoiceSource};
use rusqlite::{params, Connection};

// The dealership backend's tables, reduced to what an invoice reads.
const SCHEMA: &str = "
    CREATE TABLE Customers (
        id TEXT PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        address TEXT,
        ph_number TEXT NOT NULL,
        email TEXT NOT NULL,
        driving_licence TEXT NOT NULL
    );
    CREATE TABLE Vehicles (
        id TEXT PRIMARY KEY,
        vin TEXT NOT NULL UNIQUE,
        make TEXT NOT NULL,
        model TEXT NOT NULL,
        year INTEGER NOT NULL,
        odometer INTEGER NOT NULL,
        fuel_type TEXT NOT NULL,
        transmission TEXT NOT NULL,
        trim TEXT,
        market_price REAL NOT NULL,
        status TEXT NOT NULL
    );
    CREATE TABLE Sales (
        id TEXT PRIMARY KEY,
        vehicle_id TEXT NOT NULL,
        customer_id TEXT NOT NULL,
        date TEXT NOT NULL,
        sale_price REAL NOT NULL
    );
";

fn seeded_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute(
        "INSERT INTO Customers (id, first_name, last_name, address, ph_number, email, driving_licence)
         VALUES (?1, ?2, ?3, NULL, ?4, ?5, ?6)",
        params!["C-1", "Jane", "Doe", "519-555-0101", "jane@example.com", "D1234-56789-01234"],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO Vehicles (id, vin, make, model, year, odometer, fuel_type, transmission, trim, market_price, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            "V-1", "1HGCM82633A004352", "Honda", "Accord", 2020, 45230,
            "Gasoline", "Automatic", Option::<String>::None, 21000.0, "Sold"
        ],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO Vehicles (id, vin, make, model, year, odometer, fuel_type, transmission, trim, market_price, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            "V-2", "2T1BURHE0JC074859", "Toyota", "Corolla", 2018, 88000,
            "GAS", "AUTOMATIC", "LE", 14000.0, "Sold"
        ],
    )
    .unwrap();
    let sales: [(&str, &str, &str, &str, f64); 4] = [
        ("S-1", "V-1", "C-1", "2024-05-01", 18500.0),
        ("S-2", "V-2", "C-1", "2024-05-03", 13250.5),
        ("S-3", "V-1", "C-404", "2024-05-04", 1.0),
        ("S-4", "V-404", "C-1", "2024-05-05", 1.0),
    ];
    for (id, vehicle, customer, date, price) in sales {
        conn.execute(
            "INSERT INTO Sales (id, vehicle_id, customer_id, date, sale_price) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, vehicle, customer, date, price],
        )
        .unwrap();
    }
    conn
}

fn seeded_source() -> SqliteInvoiceSource {
    SqliteInvoiceSource::from_connection(seeded_connection())
}

#[test]
fn resolves_complete_invoice() {
    let invoice = seeded_source().invoice("S-1").unwrap();
    assert_eq!(invoice.sale_id, "S-1");
    assert_eq!(invoice.date, "2024-05-01");
    assert_eq!(invoice.sale_price, 18500.0);
    assert_eq!(invoice.customer.full_name(), "Jane Doe");
    assert_eq!(invoice.vehicle.vin, "1HGCM82633A004352");
    assert_eq!(invoice.vehicle.trim, None);
    assert_eq!(invoice.vehicle.odometer, 45230);
}

#[test]
fn backend_codes_render_verbatim() {
    let invoice = seeded_source().invoice("S-2").unwrap();
    assert_eq!(invoice.vehicle.description(), "2018 Toyota Corolla LE");
    let text = String::from_utf8_lossy(&build_invoice_pdf(&invoice)).to_string();
    assert!(text.contains("(Transmission: AUTOMATIC) Tj"));
    assert!(text.contains("(Fuel Type: GAS) Tj"));
    assert!(text.contains("($13,250.50) Tj"));
}

#[test]
fn missing_customer_is_reported() {
    let err = seeded_source().invoice("S-3").unwrap_err();
    assert!(matches!(err, ProviderError::CustomerNotFound(ref id) if id == "S-3"));
    assert!(err.is_missing_record());
}

#[test]
fn missing_vehicle_is_reported() {
    let err = seeded_source().invoice("S-4").unwrap_err();
    assert!(matches!(err, ProviderError::VehicleNotFound(ref id) if id == "S-4"));
    assert!(err.is_missing_record());
}

#[test]
fn missing_sale_is_reported() {
    let err = seeded_source().invoice("S-99").unwrap_err();
    assert!(matches!(err, ProviderError::SaleNotFound(ref id) if id == "S-99"));
    assert!(err.is_missing_record());
}

#[test]
fn recent_sales_skip_dangling_rows() {
    let sales = seeded_source().recent_sales(20).unwrap();
    let ids: Vec<&str> = sales.iter().map(|s| s.sale_id.as_str()).collect();
    assert_eq!(ids, vec!["S-2", "S-1"]);
    assert_eq!(sales[0].vehicle, "Toyota Corolla");
    assert_eq!(sales[0].customer, "Jane Doe");
    assert_eq!(sales[1].price, 18500.0);
}

#[test]
fn recent_sales_respects_limit() {
    let sales = seeded_source().recent_sales(1).unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].sale_id, "S-2");
}

#[test]
fn out_of_range_odometer_is_invalid() {
    let conn = seeded_connection();
    conn.execute("UPDATE Vehicles SET odometer = -5 WHERE id = 'V-1'", [])
        .unwrap();
    match SqliteInvoiceSource::from_connection(conn).invoice("S-1") {
        Err(ProviderError::InvalidField { field, value }) => {
            assert_eq!(field, "odometer");
            assert_eq!(value, "-5");
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }
}
