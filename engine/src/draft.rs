//! Form draft: the string-typed values currently bound to the form.

use crate::{
    error::Result,
    record::{Department, Employee, Gender, Salary, Status},
    Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A form field, named the way the form and the persisted JSON name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Gender,
    Department,
    Designation,
    Salary,
    JoiningDate,
    Image,
    Status,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Designation,
        Field::Salary,
        Field::Gender,
        Field::Department,
        Field::Image,
        Field::JoiningDate,
        Field::Status,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Gender => "gender",
            Field::Department => "department",
            Field::Designation => "designation",
            Field::Salary => "salary",
            Field::JoiningDate => "joiningDate",
            Field::Image => "image",
            Field::Status => "status",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// Current, possibly invalid, field values of the employee form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub department: String,
    pub designation: String,
    pub salary: String,
    pub joining_date: String,
    pub image: String,
    pub status: String,
}

impl FormDraft {
    /// An empty draft, the form's initial state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Gender => &self.gender,
            Field::Department => &self.department,
            Field::Designation => &self.designation,
            Field::Salary => &self.salary,
            Field::JoiningDate => &self.joining_date,
            Field::Image => &self.image,
            Field::Status => &self.status,
        }
    }

    /// Overwrite exactly one field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Gender => &mut self.gender,
            Field::Department => &mut self.department,
            Field::Designation => &mut self.designation,
            Field::Salary => &mut self.salary,
            Field::JoiningDate => &mut self.joining_date,
            Field::Image => &mut self.image,
            Field::Status => &mut self.status,
        };
        *slot = value.into();
    }

    /// Builder-style [`FormDraft::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Convert a validated draft into typed fields.
    ///
    /// Runs the given validator first and returns its errors as
    /// [`Error::Validation`] when the draft is not submittable. A field the
    /// validator let through but that still does not convert is reported as
    /// [`Error::Unconvertible`].
    pub fn to_employee(&self, validator: &crate::Validator) -> Result<Employee> {
        let errors = validator.validate(self);
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }
        self.parse_typed()
    }

    fn parse_typed(&self) -> Result<Employee> {
        fn typed<T>(field: Field, value: Option<T>) -> Result<T> {
            value.ok_or(Error::Unconvertible(field))
        }

        Ok(Employee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            gender: typed(Field::Gender, Gender::parse(&self.gender))?,
            department: typed(Field::Department, Department::parse(&self.department))?,
            designation: self.designation.clone(),
            salary: typed(Field::Salary, Salary::parse(&self.salary))?,
            joining_date: self.joining_date.clone(),
            image: self.image.clone(),
            status: typed(Field::Status, Status::parse(&self.status))?,
        })
    }
}

impl From<&Employee> for FormDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            gender: employee.gender.as_str().to_string(),
            department: employee.department.as_str().to_string(),
            designation: employee.designation.clone(),
            salary: employee.salary.to_string(),
            joining_date: employee.joining_date.clone(),
            image: employee.image.clone(),
            status: employee.status.as_str().to_string(),
        }
    }
}
