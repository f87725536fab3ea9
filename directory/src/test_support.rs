//! Test utilities for the directory crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use serde_json::{Value, json};

/// Build a complete DummyJSON user object with the given identity and location.
///
/// # Examples
///
/// ```rust
/// use directory::test_support::user_json;
///
/// let user = user_json(1, "Emily", "Johnson", "Phoenix", "Mississippi");
/// assert_eq!(user["address"]["city"], "Phoenix");
/// ```
pub fn user_json(id: u64, first_name: &str, last_name: &str, city: &str, state: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": last_name,
        "maidenName": "",
        "age": 29,
        "gender": "female",
        "email": format!("{}.{}@x.dummyjson.com", first_name.to_lowercase(), last_name.to_lowercase()),
        "phone": "+81 965-431-3024",
        "username": first_name.to_lowercase(),
        "password": "hunter2",
        "birthDate": "1996-5-30",
        "image": format!("https://dummyjson.com/icon/{}/128", first_name.to_lowercase()),
        "bloodGroup": "O-",
        "height": 193.24,
        "weight": 63.16,
        "eyeColor": "Green",
        "hair": { "color": "Brown", "type": "Curly" },
        "ip": "42.48.100.32",
        "address": address_json(city, state),
        "macAddress": "47:fa:41:18:ec:eb",
        "university": "University of Wisconsin--Madison",
        "bank": {
            "cardExpire": "03/26",
            "cardNumber": "9289760655481815",
            "cardType": "Elo",
            "currency": "CNY",
            "iban": "YPUXISOBI7TTHPK2BR3HAIXL"
        },
        "company": {
            "department": "Engineering",
            "name": "Dooley, Kozey and Cronin",
            "title": "Sales Manager",
            "address": address_json("San Francisco", "Wisconsin")
        },
        "ein": "977-175",
        "ssn": "900-590-289",
        "userAgent": "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
        "crypto": {
            "coin": "Bitcoin",
            "wallet": "0xb9fc2fe63b2a6c003f1c324c3bfa53259162181a",
            "network": "Ethereum (ERC20)"
        },
        "role": "admin"
    })
}

fn address_json(city: &str, state: &str) -> Value {
    json!({
        "address": "626 Main Street",
        "city": city,
        "state": state,
        "stateCode": "MS",
        "postalCode": "29112",
        "coordinates": { "lat": -77.16213, "lng": -92.084824 },
        "country": "United States"
    })
}

/// Wrap users in a page envelope with `total`/`limit` equal to the user count.
pub fn page_json(users: Vec<Value>) -> Value {
    let count = users.len();
    json!({ "users": users, "total": count, "skip": 0, "limit": count })
}

/// Serialise a page envelope into a response body.
pub fn page_body(users: Vec<Value>) -> Vec<u8> {
    page_json(users).to_string().into_bytes()
}

/// The two-record page used by the end-to-end scenarios.
pub fn emily_and_hassan() -> Vec<Value> {
    vec![
        user_json(1, "Emily", "Johnson", "Phoenix", "Mississippi"),
        user_json(2, "Hassan", "Cole", "Pittsburgh", "Georgia"),
    ]
}
