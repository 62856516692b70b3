/// Invoice example — writes a sample vehicle sale invoice.
///
/// Run with:
///   cargo run --example generate_invoice -p invoice-core
///
/// Output: invoice-core/examples/output/invoice_S-1.pdf
use std::path::Path;

use invoice_core::{download_invoice, Customer, Dealership, InvoiceData, Vehicle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("examples/output");
    std::fs::create_dir_all(&out_dir)?;

    let invoice = InvoiceData {
        sale_id: "S-1".to_string(),
        date: "2024-05-01".to_string(),
        sale_price: 18500.0,
        customer: Customer {
            id: "C-1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        },
        vehicle: Vehicle {
            vin: "1HGCM82633A004352".to_string(),
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            year: 2020,
            trim: Some("EX-L".to_string()),
            odometer: 45230,
            transmission: "Automatic".to_string(),
            fuel_type: "Gasoline".to_string(),
        },
    };

    let path = download_invoice(&invoice, &Dealership::default(), &out_dir)?;
    println!("Written to {}", path.display());
    Ok(())
}
