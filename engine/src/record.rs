//! Employee record types.

use crate::EmployeeId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Gender as offered by the form's select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse the exact option label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

/// Department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    HR,
    IT,
    Finance,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::HR, Department::IT, Department::Finance];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::HR => "HR",
            Department::IT => "IT",
            Department::Finance => "Finance",
        }
    }

    /// Parse the exact option label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}

/// Employment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }

    /// Parse the exact option label.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Status::Active)
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Gender, Department, Status);

/// Monthly salary in whole currency units.
///
/// Holds the decimal digits as entered, with no upper bound on the value.
/// Serialized as that string, which is how the form and the persisted copy
/// carry it. Deserialization also accepts a bare JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Salary(String);

impl Salary {
    pub fn new(amount: u64) -> Self {
        Self(amount.to_string())
    }

    /// Accept a non-empty run of ASCII digits.
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// The digits as entered, leading zeros included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The digits without leading zeros; `"0"` for zero.
    pub fn digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() {
            "0"
        } else {
            trimmed
        }
    }

    /// The value, when it fits in a `u64`.
    pub fn amount(&self) -> Option<u64> {
        self.digits().parse().ok()
    }

    /// Numeric `self >= minimum`, for any number of digits.
    pub fn at_least(&self, minimum: u64) -> bool {
        let digits = self.digits();
        let minimum = minimum.to_string();
        (digits.len(), digits) >= (minimum.len(), minimum.as_str())
    }

    /// Digits grouped in threes with commas, e.g. `1,250,000`.
    pub fn grouped(&self) -> String {
        let digits = self.digits();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SalaryVisitor;

        impl de::Visitor<'_> for SalaryVisitor {
            type Value = Salary;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal salary string or a non-negative integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Salary, E> {
                Ok(Salary::new(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Salary, E> {
                u64::try_from(v)
                    .map(Salary::new)
                    .map_err(|_| E::custom(format!("negative salary: {}", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Salary, E> {
                Salary::parse(v)
                    .ok_or_else(|| E::custom(format!("salary is not a number: {:?}", v)))
            }
        }

        deserializer.deserialize_any(SalaryVisitor)
    }
}

/// The editable part of an employee entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Ten ASCII digits, kept as text
    pub phone: String,
    pub gender: Gender,
    pub department: Department,
    pub designation: String,
    pub salary: Salary,
    /// Calendar date as entered, typically `YYYY-MM-DD`
    pub joining_date: String,
    /// Profile image URL
    pub image: String,
    pub status: Status,
}

impl Employee {
    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A stored employee: generated id plus the editable fields.
///
/// Serializes flat, so the persisted array reads
/// `[{"id": "EMP…", "firstName": …, …}]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique, immutable after creation
    pub id: EmployeeId,
    #[serde(flatten)]
    pub employee: Employee,
}

impl EmployeeRecord {
    pub fn new(id: impl Into<EmployeeId>, employee: Employee) -> Self {
        Self {
            id: id.into(),
            employee,
        }
    }
}
