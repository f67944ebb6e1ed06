// tests/support/builders.rs
use serde_json::{Value, json};

pub fn contact_payload() -> Value {
    json!({
        "name": "Maria Ionescu",
        "email": "maria@example.ro",
        "subject": "Listare",
        "message": "Bună ziua, aș vrea să îmi adaug afacerea în director."
    })
}

pub fn business_payload(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "category": category,
        "description": "1. Servicii\n\nReparații auto și ITP.\nProgramări zilnic.\n\nProgram:\n\nLuni-Vineri 9-18",
        "city": "Madrid",
        "phone": "+34 600 111 222",
        "website": "https://exemplu.es",
        "languages": ["ro", "es"],
        "owner_email": "owner@exemplu.es"
    })
}

pub fn newsletter_payload(email: &str) -> Value {
    json!({ "email": email, "locale": "en" })
}
