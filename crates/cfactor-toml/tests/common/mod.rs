//! Record types shared by the integration tests.
//!
//! - `DemoConfig` / `Author`: one level of nesting, every supported field type.
//! - `TransactionRecord` tree: nesting three levels deep
//!   (`client` → `client.address` → `client.address.geopoint`) plus a sibling.
//! - `Employee`: flat record.
//! - `Orphan` / `Forgetful`: nested fields with a missing / lazy hook.
#![allow(dead_code)]

use cfactor_toml::{
    set_field, unknown_field, FieldDescriptor, FieldRef, NestedRecords, Record, RecordType,
    Result, ScalarType, Timestamp, Value,
};
use chrono::DateTime;

pub fn ts(text: &str) -> Timestamp {
    DateTime::parse_from_rfc3339(text).expect("valid RFC 3339 test timestamp")
}

// ─────────────────────────────────────────────────────────────────────────────
// DemoConfig / Author
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemoConfig {
    pub version: String,
    pub role: String,
    pub author: Author,
    pub working_hours_day: i64,
    pub active_profile: bool,
    pub hobbies: Vec<String>,
    pub task_numbers: Vec<i64>,
    pub last_update_time: Timestamp,
    pub short_date: Timestamp,
    pub short_date_time: Timestamp,
    pub floating_points32: Vec<f32>,
    pub special_dates: Vec<Timestamp>,
}

static DEMO_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("version", "version", ScalarType::String),
    FieldDescriptor::scalar("role", "role", ScalarType::String),
    FieldDescriptor::nested("author", "author", RecordType::of::<Author>()),
    FieldDescriptor::scalar("working_hours_day", "workingHoursDay", ScalarType::Int),
    FieldDescriptor::scalar("active_profile", "activeProfile", ScalarType::Bool),
    FieldDescriptor::array("hobbies", "hobbies", ScalarType::String),
    FieldDescriptor::array("task_numbers", "taskNumbers", ScalarType::Int),
    FieldDescriptor::scalar("last_update_time", "lastUpdateTime", ScalarType::Timestamp),
    FieldDescriptor::scalar("short_date", "shortDate", ScalarType::Timestamp),
    FieldDescriptor::scalar("short_date_time", "shortDateTime", ScalarType::Timestamp),
    FieldDescriptor::array("floating_points32", "floatingPoints32", ScalarType::Float32),
    FieldDescriptor::array("special_dates", "specialDates", ScalarType::Timestamp),
];

impl Record for DemoConfig {
    fn fields(&self) -> &'static [FieldDescriptor] {
        DEMO_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "version" => FieldRef::of(&self.version),
            "role" => FieldRef::of(&self.role),
            "author" => FieldRef::Nested(&self.author),
            "working_hours_day" => FieldRef::of(&self.working_hours_day),
            "active_profile" => FieldRef::of(&self.active_profile),
            "hobbies" => FieldRef::of(&self.hobbies),
            "task_numbers" => FieldRef::of(&self.task_numbers),
            "last_update_time" => FieldRef::of(&self.last_update_time),
            "short_date" => FieldRef::of(&self.short_date),
            "short_date_time" => FieldRef::of(&self.short_date_time),
            "floating_points32" => FieldRef::of(&self.floating_points32),
            "special_dates" => FieldRef::of(&self.special_dates),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "version" => set_field(&mut self.version, name, value),
            "role" => set_field(&mut self.role, name, value),
            "working_hours_day" => set_field(&mut self.working_hours_day, name, value),
            "active_profile" => set_field(&mut self.active_profile, name, value),
            "hobbies" => set_field(&mut self.hobbies, name, value),
            "task_numbers" => set_field(&mut self.task_numbers, name, value),
            "last_update_time" => set_field(&mut self.last_update_time, name, value),
            "short_date" => set_field(&mut self.short_date, name, value),
            "short_date_time" => set_field(&mut self.short_date_time, name, value),
            "floating_points32" => set_field(&mut self.floating_points32, name, value),
            "special_dates" => set_field(&mut self.special_dates, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }

    fn attach_nested(&mut self, nested: &mut NestedRecords) -> Result<()> {
        if let Some(author) = nested.resolve::<Author>()? {
            self.author = author;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub height: f32,
    pub birthday: Timestamp,
    pub lucky_numbers: Vec<i64>,
    pub attributes64: Vec<f64>,
    pub likes: Vec<bool>,
    pub registration_dates: Vec<Timestamp>,
}

static AUTHOR_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("first_name", "author.firstName", ScalarType::String),
    FieldDescriptor::scalar("last_name", "author.lastName", ScalarType::String),
    FieldDescriptor::scalar("age", "author.age", ScalarType::Int),
    FieldDescriptor::scalar("height", "author.height", ScalarType::Float32),
    FieldDescriptor::scalar("birthday", "author.birthday", ScalarType::Timestamp),
    FieldDescriptor::array("lucky_numbers", "author.luckyNumbers", ScalarType::Int),
    FieldDescriptor::array("attributes64", "author.attributes64", ScalarType::Float64),
    FieldDescriptor::array("likes", "author.likes", ScalarType::Bool),
    FieldDescriptor::array("registration_dates", "author.registrationDates", ScalarType::Timestamp),
];

impl Record for Author {
    fn fields(&self) -> &'static [FieldDescriptor] {
        AUTHOR_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "first_name" => FieldRef::of(&self.first_name),
            "last_name" => FieldRef::of(&self.last_name),
            "age" => FieldRef::of(&self.age),
            "height" => FieldRef::of(&self.height),
            "birthday" => FieldRef::of(&self.birthday),
            "lucky_numbers" => FieldRef::of(&self.lucky_numbers),
            "attributes64" => FieldRef::of(&self.attributes64),
            "likes" => FieldRef::of(&self.likes),
            "registration_dates" => FieldRef::of(&self.registration_dates),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "first_name" => set_field(&mut self.first_name, name, value),
            "last_name" => set_field(&mut self.last_name, name, value),
            "age" => set_field(&mut self.age, name, value),
            "height" => set_field(&mut self.height, name, value),
            "birthday" => set_field(&mut self.birthday, name, value),
            "lucky_numbers" => set_field(&mut self.lucky_numbers, name, value),
            "attributes64" => set_field(&mut self.attributes64, name, value),
            "likes" => set_field(&mut self.likes, name, value),
            "registration_dates" => set_field(&mut self.registration_dates, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TransactionRecord tree
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionRecord {
    pub client: Client,
    pub amount: f32,
    pub broker: Broker,
}

static TRANSACTION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::nested("client", "client", RecordType::of::<Client>()),
    FieldDescriptor::scalar("amount", "amount", ScalarType::Float32),
    FieldDescriptor::nested("broker", "broker", RecordType::of::<Broker>()),
];

impl Record for TransactionRecord {
    fn fields(&self) -> &'static [FieldDescriptor] {
        TRANSACTION_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "client" => FieldRef::Nested(&self.client),
            "amount" => FieldRef::of(&self.amount),
            "broker" => FieldRef::Nested(&self.broker),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "amount" => set_field(&mut self.amount, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }

    fn attach_nested(&mut self, nested: &mut NestedRecords) -> Result<()> {
        if let Some(client) = nested.resolve::<Client>()? {
            self.client = client;
        }
        if let Some(broker) = nested.resolve::<Broker>()? {
            self.broker = broker;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Client {
    pub full_name: String,
    pub id: String,
    pub address: ClientAddress,
}

static CLIENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("full_name", "client.fullname", ScalarType::String),
    FieldDescriptor::scalar("id", "client.id", ScalarType::String),
    FieldDescriptor::nested("address", "client.address", RecordType::of::<ClientAddress>()),
];

impl Record for Client {
    fn fields(&self) -> &'static [FieldDescriptor] {
        CLIENT_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "full_name" => FieldRef::of(&self.full_name),
            "id" => FieldRef::of(&self.id),
            "address" => FieldRef::Nested(&self.address),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "full_name" => set_field(&mut self.full_name, name, value),
            "id" => set_field(&mut self.id, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }

    fn attach_nested(&mut self, nested: &mut NestedRecords) -> Result<()> {
        if let Some(address) = nested.resolve::<ClientAddress>()? {
            self.address = address;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientAddress {
    pub street_num: i64,
    pub street_name: String,
    pub city: String,
    pub country: String,
    pub geo_point: GeoPoint,
}

static ADDRESS_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("street_num", "client.address.streetnum", ScalarType::Int),
    FieldDescriptor::scalar("street_name", "client.address.streetname", ScalarType::String),
    FieldDescriptor::scalar("city", "client.address.city", ScalarType::String),
    FieldDescriptor::scalar("country", "client.address.country", ScalarType::String),
    FieldDescriptor::nested("geo_point", "client.address.geopoint", RecordType::of::<GeoPoint>()),
];

impl Record for ClientAddress {
    fn fields(&self) -> &'static [FieldDescriptor] {
        ADDRESS_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "street_num" => FieldRef::of(&self.street_num),
            "street_name" => FieldRef::of(&self.street_name),
            "city" => FieldRef::of(&self.city),
            "country" => FieldRef::of(&self.country),
            "geo_point" => FieldRef::Nested(&self.geo_point),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "street_num" => set_field(&mut self.street_num, name, value),
            "street_name" => set_field(&mut self.street_name, name, value),
            "city" => set_field(&mut self.city, name, value),
            "country" => set_field(&mut self.country, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }

    fn attach_nested(&mut self, nested: &mut NestedRecords) -> Result<()> {
        if let Some(geo_point) = nested.resolve::<GeoPoint>()? {
            self.geo_point = geo_point;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
    pub lat_lon_arr: Vec<f64>,
}

static GEO_POINT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("lat", "client.address.geopoint.Lat", ScalarType::Float64),
    FieldDescriptor::scalar("lon", "client.address.geopoint.Lon", ScalarType::Float64),
    FieldDescriptor::array("lat_lon_arr", "client.address.geopoint.LatLonArr", ScalarType::Float64),
];

impl Record for GeoPoint {
    fn fields(&self) -> &'static [FieldDescriptor] {
        GEO_POINT_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "lat" => FieldRef::of(&self.lat),
            "lon" => FieldRef::of(&self.lon),
            "lat_lon_arr" => FieldRef::of(&self.lat_lon_arr),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "lat" => set_field(&mut self.lat, name, value),
            "lon" => set_field(&mut self.lon, name, value),
            "lat_lon_arr" => set_field(&mut self.lat_lon_arr, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Broker {
    pub full_name: String,
    pub id: String,
    pub licences: Vec<String>,
    pub licence_expiry_date: Timestamp,
}

static BROKER_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("full_name", "broker.fullname", ScalarType::String),
    FieldDescriptor::scalar("id", "broker.id", ScalarType::String),
    FieldDescriptor::array("licences", "broker.licences", ScalarType::String),
    FieldDescriptor::scalar("licence_expiry_date", "broker.licenceExpiryDate", ScalarType::Timestamp),
];

impl Record for Broker {
    fn fields(&self) -> &'static [FieldDescriptor] {
        BROKER_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "full_name" => FieldRef::of(&self.full_name),
            "id" => FieldRef::of(&self.id),
            "licences" => FieldRef::of(&self.licences),
            "licence_expiry_date" => FieldRef::of(&self.licence_expiry_date),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "full_name" => set_field(&mut self.full_name, name, value),
            "id" => set_field(&mut self.id, name, value),
            "licences" => set_field(&mut self.licences, name, value),
            "licence_expiry_date" => set_field(&mut self.licence_expiry_date, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Employee (flat)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee {
    pub name: String,
    pub age: i64,
    pub working_hours_day: i64,
    pub ratio: f64,
    pub active: bool,
    pub full_date: Timestamp,
    pub short_date: Timestamp,
}

static EMPLOYEE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("name", "name", ScalarType::String),
    FieldDescriptor::scalar("age", "age", ScalarType::Int),
    FieldDescriptor::scalar("working_hours_day", "workingHoursDay", ScalarType::Int),
    FieldDescriptor::scalar("ratio", "ratio", ScalarType::Float64),
    FieldDescriptor::scalar("active", "active", ScalarType::Bool),
    FieldDescriptor::scalar("full_date", "fullDate", ScalarType::Timestamp),
    FieldDescriptor::scalar("short_date", "shortDate", ScalarType::Timestamp),
];

impl Record for Employee {
    fn fields(&self) -> &'static [FieldDescriptor] {
        EMPLOYEE_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "name" => FieldRef::of(&self.name),
            "age" => FieldRef::of(&self.age),
            "working_hours_day" => FieldRef::of(&self.working_hours_day),
            "ratio" => FieldRef::of(&self.ratio),
            "active" => FieldRef::of(&self.active),
            "full_date" => FieldRef::of(&self.full_date),
            "short_date" => FieldRef::of(&self.short_date),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "name" => set_field(&mut self.name, name, value),
            "age" => set_field(&mut self.age, name, value),
            "working_hours_day" => set_field(&mut self.working_hours_day, name, value),
            "ratio" => set_field(&mut self.ratio, name, value),
            "active" => set_field(&mut self.active, name, value),
            "full_date" => set_field(&mut self.full_date, name, value),
            "short_date" => set_field(&mut self.short_date, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records with a missing or incomplete hook
// ─────────────────────────────────────────────────────────────────────────────

/// Has a nested field but keeps the default (missing) hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Orphan {
    pub name: String,
    pub author: Author,
}

static ORPHAN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::scalar("name", "name", ScalarType::String),
    FieldDescriptor::nested("author", "author", RecordType::of::<Author>()),
];

impl Record for Orphan {
    fn fields(&self) -> &'static [FieldDescriptor] {
        ORPHAN_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        Some(match name {
            "name" => FieldRef::of(&self.name),
            "author" => FieldRef::Nested(&self.author),
            _ => return None,
        })
    }

    fn set(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "name" => set_field(&mut self.name, name, value),
            _ => Err(unknown_field(self, name)),
        }
    }
}

/// Implements the hook but never claims anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forgetful {
    pub author: Author,
}

static FORGETFUL_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::nested(
    "author",
    "author",
    RecordType::of::<Author>(),
)];

impl Record for Forgetful {
    fn fields(&self) -> &'static [FieldDescriptor] {
        FORGETFUL_FIELDS
    }

    fn get(&self, name: &str) -> Option<FieldRef<'_>> {
        match name {
            "author" => Some(FieldRef::Nested(&self.author)),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, _value: Value) -> Result<()> {
        Err(unknown_field(self, name))
    }

    fn attach_nested(&mut self, _nested: &mut NestedRecords) -> Result<()> {
        Ok(())
    }
}
