use crate::parse::{parse_amount, split_items};
use serde::{Deserialize, Serialize};

/// Invoice form from the admin dashboard.
///
/// Amounts are kept as typed; they are coerced when the request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceForm {
    pub patient_email: String,
    pub patient_name: String,
    /// Comma-separated list of item names
    pub items: String,
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

/// One invoice line.
///
/// Lines built from the form always carry price 0 and quantity 1. Blank
/// entries in the items field still produce a (nameless) line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl InvoiceLineItem {
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: 0.0,
            quantity: 1,
        }
    }
}

/// Body of `POST /api/invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    pub patient_email: String,
    pub patient_name: String,
    pub items: Vec<InvoiceLineItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl From<InvoiceForm> for InvoiceRequest {
    fn from(form: InvoiceForm) -> Self {
        let items = split_items(&form.items)
            .into_iter()
            .map(InvoiceLineItem::placeholder)
            .collect();

        Self {
            patient_email: form.patient_email,
            patient_name: form.patient_name,
            items,
            subtotal: parse_amount(&form.subtotal),
            tax: parse_amount(&form.tax),
            total: parse_amount(&form.total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(items: &str, subtotal: &str, tax: &str, total: &str) -> InvoiceForm {
        InvoiceForm {
            patient_email: "ana@example.com".into(),
            patient_name: "Ana Ruiz".into(),
            items: items.into(),
            subtotal: subtotal.into(),
            tax: tax.into(),
            total: total.into(),
        }
    }

    #[test]
    fn test_items_become_placeholder_lines() {
        let request = InvoiceRequest::from(form("Bread, Milk", "abc", "", ""));

        assert_eq!(
            request.items,
            vec![
                InvoiceLineItem::placeholder("Bread"),
                InvoiceLineItem::placeholder("Milk"),
            ]
        );
        assert_eq!(request.subtotal, 0.0);
        assert_eq!(request.tax, 0.0);
        assert_eq!(request.total, 0.0);
    }

    #[test]
    fn test_amounts_parsed() {
        let request = InvoiceRequest::from(form("Consultation", "80", "6.4", " 86.40 "));
        assert_eq!(request.subtotal, 80.0);
        assert_eq!(request.tax, 6.4);
        assert_eq!(request.total, 86.4);
    }

    #[test]
    fn test_wire_shape() {
        let request = InvoiceRequest::from(form("Bread", "1", "0", "1"));
        let body = serde_json::to_value(&request).unwrap();

        let line = &body["items"][0];
        assert_eq!(line["name"], "Bread");
        assert_eq!(line["price"].as_f64(), Some(0.0));
        assert_eq!(line["quantity"].as_u64(), Some(1));
        assert_eq!(body["patient_name"], "Ana Ruiz");
        assert_eq!(body["subtotal"].as_f64(), Some(1.0));
    }

    #[test]
    fn test_blank_items_are_kept() {
        let request = InvoiceRequest::from(form("Bread,,Milk", "0", "0", "0"));

        assert_eq!(
            request.items,
            vec![
                InvoiceLineItem::placeholder("Bread"),
                InvoiceLineItem::placeholder(""),
                InvoiceLineItem::placeholder("Milk"),
            ]
        );
    }
}
