//! User records as returned by the DummyJSON users endpoint.
//!
//! Records are decoded once per response and never mutated afterwards. Every
//! declared field is required and unknown fields are ignored.

use std::fmt;

use serde::Serialize;

use super::decode::{DecodeError, ObjectReader};

/// Stable numeric user identifier, unique within one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// String value kept out of `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive(String);

impl Sensitive {
    /// Access the underlying value.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Sensitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sensitive(***)")
    }
}

/// Hair attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Hair {
    /// Hair colour.
    pub color: String,
    /// Hair type, e.g. `Curly`.
    pub kind: String,
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Postal address.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// State name.
    pub state: String,
    /// Short state code.
    pub state_code: String,
    /// Postal code as published by the API.
    pub postal_code: String,
    /// Location of the address.
    pub coordinates: Coordinates,
    /// Country name.
    pub country: String,
}

/// Payment card and account details.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    /// Card expiry as `MM/YY`.
    pub card_expire: String,
    /// Card number.
    pub card_number: Sensitive,
    /// Card network, e.g. `Visa`.
    pub card_type: String,
    /// Account currency.
    pub currency: String,
    /// Account IBAN.
    pub iban: Sensitive,
}

/// Employer details.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    /// Department name.
    pub department: String,
    /// Company name.
    pub name: String,
    /// Job title.
    pub title: String,
    /// Office address.
    pub address: Address,
}

/// Crypto wallet details.
#[derive(Debug, Clone, PartialEq)]
pub struct Crypto {
    /// Coin name.
    pub coin: String,
    /// Wallet address.
    pub wallet: String,
    /// Network name.
    pub network: String,
}

/// One decoded user record.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// Unique identifier within the page.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Maiden name, possibly empty.
    pub maiden_name: String,
    /// Age in years.
    pub age: u32,
    /// Gender as published by the API.
    pub gender: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Login name.
    pub username: String,
    /// Account password.
    pub password: Sensitive,
    /// Birth date as published by the API.
    pub birth_date: String,
    /// Avatar URL published by the API (unused by the display projection).
    pub image: String,
    /// Blood group.
    pub blood_group: String,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    /// Eye colour.
    pub eye_color: String,
    /// Hair attributes.
    pub hair: Hair,
    /// Last known IP address.
    pub ip: String,
    /// Home address.
    pub address: Address,
    /// Device MAC address.
    pub mac_address: String,
    /// University attended.
    pub university: String,
    /// Bank details.
    pub bank: Bank,
    /// Employer details.
    pub company: Company,
    /// Employer identification number.
    pub ein: String,
    /// Social security number.
    pub ssn: Sensitive,
    /// Browser user agent.
    pub user_agent: String,
    /// Crypto wallet details.
    pub crypto: Crypto,
    /// Account role, e.g. `admin`.
    pub role: String,
}

impl UserRecord {
    pub(crate) fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: UserId::new(reader.unsigned("id")?),
            first_name: reader.string("firstName")?,
            last_name: reader.string("lastName")?,
            maiden_name: reader.string("maidenName")?,
            age: reader.unsigned("age")?,
            gender: reader.string("gender")?,
            email: reader.string("email")?,
            phone: reader.string("phone")?,
            username: reader.string("username")?,
            password: Sensitive(reader.string("password")?),
            birth_date: reader.string("birthDate")?,
            image: reader.string("image")?,
            blood_group: reader.string("bloodGroup")?,
            height: reader.number("height")?,
            weight: reader.number("weight")?,
            eye_color: reader.string("eyeColor")?,
            hair: Hair::read(&reader.object("hair")?)?,
            ip: reader.string("ip")?,
            address: Address::read(&reader.object("address")?)?,
            mac_address: reader.string("macAddress")?,
            university: reader.string("university")?,
            bank: Bank::read(&reader.object("bank")?)?,
            company: Company::read(&reader.object("company")?)?,
            ein: reader.string("ein")?,
            ssn: Sensitive(reader.string("ssn")?),
            user_agent: reader.string("userAgent")?,
            crypto: Crypto::read(&reader.object("crypto")?)?,
            role: reader.string("role")?,
        })
    }
}

impl Hair {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            color: reader.string("color")?,
            kind: reader.string("type")?,
        })
    }
}

impl Coordinates {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            lat: reader.number("lat")?,
            lng: reader.number("lng")?,
        })
    }
}

impl Address {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            street: reader.string("address")?,
            city: reader.string("city")?,
            state: reader.string("state")?,
            state_code: reader.string("stateCode")?,
            postal_code: reader.string("postalCode")?,
            coordinates: Coordinates::read(&reader.object("coordinates")?)?,
            country: reader.string("country")?,
        })
    }
}

impl Bank {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            card_expire: reader.string("cardExpire")?,
            card_number: Sensitive(reader.string("cardNumber")?),
            card_type: reader.string("cardType")?,
            currency: reader.string("currency")?,
            iban: Sensitive(reader.string("iban")?),
        })
    }
}

impl Company {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            department: reader.string("department")?,
            name: reader.string("name")?,
            title: reader.string("title")?,
            address: Address::read(&reader.object("address")?)?,
        })
    }
}

impl Crypto {
    fn read(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            coin: reader.string("coin")?,
            wallet: reader.string("wallet")?,
            network: reader.string("network")?,
        })
    }
}
