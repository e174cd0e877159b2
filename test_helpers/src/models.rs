//! Source and destination model types used by the mapping tests.

use litemapper::Mappable;
use serde::{Deserialize, Serialize};

/// Flat source record with a field that has no destination counterpart by
/// name (`name` versus `full_name` on the DTO).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct Person {
    /// Given name; the DTO calls this `full_name`.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Matches the DTO field of the same name and type.
    pub secret: String,
}

/// Flat destination record for [`Person`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct PersonDto {
    /// Only populated through a member transform.
    pub full_name: String,
    /// Auto-matched by name and type.
    pub age: u32,
    /// Auto-matched by name and type unless ignored.
    pub secret: String,
}

/// Leaf-only nested source record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
}

/// Destination counterpart of [`Address`] with identical field names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct AddressDto {
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// Country name.
    pub country: String,
}

/// Source record with two optional nested addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct Contact {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Optional nested record, mapped recursively when present.
    pub home_address: Option<Address>,
    /// Second optional nested record.
    pub work_address: Option<Address>,
}

/// Destination counterpart of [`Contact`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct ContactDto {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Stays `None` when the source side is absent.
    pub home_address: Option<AddressDto>,
    /// Stays `None` when the source side is absent.
    pub work_address: Option<AddressDto>,
}

/// Middle link of the three-level nesting chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Nested one level further down.
    pub head_office: Option<Address>,
}

/// Destination counterpart of [`Company`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct CompanyDto {
    /// Company name.
    pub name: String,
    /// Nested one level further down.
    pub head_office: Option<AddressDto>,
}

/// Top of the three-level nesting chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct Employee {
    /// Display name.
    pub name: String,
    /// Second level of nesting.
    pub company: Option<Company>,
    /// Independent single-level nesting.
    pub home_address: Option<Address>,
}

/// Destination counterpart of [`Employee`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Mappable)]
pub struct EmployeeDto {
    /// Display name.
    pub name: String,
    /// Second level of nesting.
    pub company: Option<CompanyDto>,
    /// Independent single-level nesting.
    pub home_address: Option<AddressDto>,
}

/// A person with something to hide.
#[must_use]
pub fn sample_person() -> Person {
    Person {
        name: "Ulaş".to_owned(),
        age: 30,
        secret: "hidden".to_owned(),
    }
}

/// A home address in New York.
#[must_use]
pub fn home_address() -> Address {
    Address {
        street: "123 Main St".to_owned(),
        city: "New York".to_owned(),
        country: "USA".to_owned(),
    }
}

/// A work address in San Francisco.
#[must_use]
pub fn work_address() -> Address {
    Address {
        street: "789 Business Blvd".to_owned(),
        city: "San Francisco".to_owned(),
        country: "USA".to_owned(),
    }
}

/// An employee three levels deep: employee, company, head office.
#[must_use]
pub fn sample_employee() -> Employee {
    Employee {
        name: "John Developer".to_owned(),
        company: Some(Company {
            name: "Tech Corp".to_owned(),
            head_office: Some(Address {
                street: "100 Tech Street".to_owned(),
                city: "Silicon Valley".to_owned(),
                country: "USA".to_owned(),
            }),
        }),
        home_address: Some(Address {
            street: "200 Home Ave".to_owned(),
            city: "Hometown".to_owned(),
            country: "USA".to_owned(),
        }),
    }
}
