//! Address class results.

use serde::Serialize;
use std::fmt;

/// Classful range of a public address, by first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PublicClass {
    A,
    B,
    C,
    D,
    E,
    /// First octet 0 or 127.
    Invalid,
}

/// RFC 1918 private range an address falls in.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrivateClass {
    A,
    B,
    C,
    NotPrivate,
}

/// Outcome of checking an address: private ranges win over the public classes.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClassification {
    Private(PrivateClass),
    Public(PublicClass),
}

impl fmt::Display for PublicClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PublicClass::A => "A",
            PublicClass::B => "B",
            PublicClass::C => "C",
            PublicClass::D => "D",
            PublicClass::E => "E",
            PublicClass::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}

impl fmt::Display for PrivateClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PrivateClass::A => "A",
            PrivateClass::B => "B",
            PrivateClass::C => "C",
            PrivateClass::NotPrivate => "Not a private IP",
        };
        f.write_str(name)
    }
}

impl fmt::Display for IpClassification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpClassification::Private(class) => write!(f, "Private IP, class {class}"),
            IpClassification::Public(class) => write!(f, "Public IP, class {class}"),
        }
    }
}
