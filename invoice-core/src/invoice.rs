use serde::{Deserialize, Serialize};

/// Identifying fields of the buyer. Contact details are not
/// needed to render an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Customer {
    /// "First Last", as printed in the bill-to block.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The vehicle sold. Transmission and fuel type are kept as the
/// strings the inventory stores and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    /// Kilometres.
    pub odometer: u32,
    pub transmission: String,
    pub fuel_type: String,
}

impl Vehicle {
    /// The trim level, if one is set. Blank trims count as absent.
    pub fn trim(&self) -> Option<&str> {
        self.trim.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// "Year Make Model[ Trim]". Surrounding whitespace is kept on
    /// a trim that has text; a blank trim is dropped with its space.
    pub fn description(&self) -> String {
        let mut s = format!("{} {} {}", self.year, self.make, self.model);
        if let Some(trim) = self.trim() {
            s.push(' ');
            s.push_str(trim);
        }
        s
    }
}

/// Everything printed on one invoice: a sale joined with its
/// customer and vehicle. The builder renders these fields as given
/// and performs no validation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub sale_id: String,
    /// `YYYY-MM-DD`, printed verbatim.
    pub date: String,
    pub sale_price: f64,
    pub customer: Customer,
    pub vehicle: Vehicle,
}

impl InvoiceData {
    /// Suggested download name, `invoice_<saleId>.pdf`.
    pub fn file_name(&self) -> String {
        invoice_file_name(&self.sale_id)
    }
}

/// `invoice_<saleId>.pdf`, with the identifier substituted verbatim.
pub fn invoice_file_name(sale_id: &str) -> String {
    format!("invoice_{}.pdf", sale_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accord(trim: Option<&str>) -> Vehicle {
        Vehicle {
            vin: "1HGCM82633A004352".to_string(),
            make: "Honda".to_string(),
            model: "Accord".to_string(),
            year: 2020,
            trim: trim.map(str::to_string),
            odometer: 45230,
            transmission: "Automatic".to_string(),
            fuel_type: "Gasoline".to_string(),
        }
    }

    #[test]
    fn description_with_trim() {
        assert_eq!(accord(Some("EX-L")).description(), "2020 Honda Accord EX-L");
        assert_eq!(accord(Some(" LX")).description(), "2020 Honda Accord  LX");
    }

    #[test]
    fn description_without_trim_has_no_trailing_space() {
        assert_eq!(accord(None).description(), "2020 Honda Accord");
        assert_eq!(accord(Some("")).description(), "2020 Honda Accord");
        assert_eq!(accord(Some("  ")).description(), "2020 Honda Accord");
    }

    #[test]
    fn file_name_uses_sale_id_verbatim() {
        assert_eq!(invoice_file_name("S-1"), "invoice_S-1.pdf");
    }

    #[test]
    fn deserializes_frontend_shape() {
        let json = r#"{
            "saleId": "S-1",
            "date": "2024-05-01",
            "salePrice": 18500,
            "customer": {"id": "C-1", "first_name": "Jane", "last_name": "Doe"},
            "vehicle": {
                "id": "V-9",
                "vin": "1HGCM82633A004352",
                "make": "Honda",
                "model": "Accord",
                "year": 2020,
                "odometer": 45230,
                "transmission": "Automatic",
                "fuel_type": "Gasoline",
                "market_price": 21000,
                "status": "Sold"
            }
        }"#;
        let invoice: InvoiceData = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.sale_id, "S-1");
        assert_eq!(invoice.sale_price, 18500.0);
        assert_eq!(invoice.customer.full_name(), "Jane Doe");
        assert_eq!(invoice.vehicle, accord(None));
    }
}
