//! Display tree for the employee manager.
//!
//! The engine does not draw anything. It derives a tree of display
//! primitives that an external rendering engine lays out. Every node
//! serializes with a `kind` tag.

use crate::{
    config::RosterConfig,
    form::EmployeeForm,
    record::{Department, Gender, Status},
    storage::SessionStorage,
    EmployeeId, EmployeeRecord, Field,
};
use serde::{Deserialize, Serialize};

/// Color role of a badge or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// What a button does when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum Action {
    Submit,
    Edit { id: EmployeeId },
    Delete { id: EmployeeId },
}

/// Input control behind a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Number,
    Date,
    Select,
}

/// One labelled input with its error, if any, shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldView {
    pub field: Field,
    pub label: String,
    pub input: InputKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices for a select; the first entry is the empty prompt
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An option of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn prompt(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn of(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// A display primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Node {
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Row {
        children: Vec<Node>,
    },
    /// A grid column; `span` is out of 12
    Column {
        span: u8,
        children: Vec<Node>,
    },
    FormField(FormFieldView),
    Button {
        label: String,
        tone: Tone,
        outline: bool,
        action: Action,
    },
    Card {
        key: String,
        image: String,
        children: Vec<Node>,
    },
    Badge {
        text: String,
        tone: Tone,
    },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
    },
    Link {
        label: String,
        href: String,
    },
    Divider,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text {
            text: text.into(),
            class: None,
        }
    }

    pub fn styled_text(text: impl Into<String>, class: &str) -> Self {
        Node::Text {
            text: text.into(),
            class: Some(class.to_string()),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container { children, .. }
            | Node::Row { children }
            | Node::Column { children, .. }
            | Node::Card { children, .. } => children.as_slice(),
            _ => &[],
        }
    }

    /// Depth-first walk over this node and everything below it.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}

/// Display data for one employee card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCard {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub image: String,
    pub status: Status,
    pub status_tone: Tone,
    pub department: Department,
    pub designation: String,
    pub gender: Gender,
    pub phone: String,
    /// Grouped digits, e.g. `5,000`
    pub salary: String,
    /// Currency symbol plus grouped digits, e.g. `₹ 5,000`
    pub salary_display: String,
    pub joining_date: String,
    pub actions: Vec<Action>,
}

impl EmployeeCard {
    pub fn from_record(record: &EmployeeRecord, currency_symbol: &str) -> Self {
        let employee = &record.employee;
        let salary = employee.salary.grouped();
        Self {
            id: record.id.clone(),
            name: employee.full_name(),
            email: employee.email.clone(),
            image: employee.image.clone(),
            status: employee.status,
            status_tone: if employee.status.is_active() {
                Tone::Success
            } else {
                Tone::Secondary
            },
            department: employee.department,
            designation: employee.designation.clone(),
            gender: employee.gender,
            phone: employee.phone.clone(),
            salary_display: format!("{} {}", currency_symbol, salary),
            salary,
            joining_date: employee.joining_date.clone(),
            actions: vec![
                Action::Edit {
                    id: record.id.clone(),
                },
                Action::Delete {
                    id: record.id.clone(),
                },
            ],
        }
    }

    pub fn to_node(&self) -> Node {
        let mut children = vec![
            Node::Heading {
                level: 5,
                text: self.name.clone(),
            },
            Node::Badge {
                text: self.status.to_string(),
                tone: self.status_tone,
            },
            Node::styled_text(self.email.clone(), "text-muted small"),
            Node::Badge {
                text: self.department.to_string(),
                tone: Tone::Primary,
            },
            Node::Divider,
            Node::text(format!("Designation: {}", self.designation)),
            Node::text(format!("Gender: {}", self.gender)),
            Node::text(format!("Phone: {}", self.phone)),
            Node::styled_text(self.salary_display.clone(), "text-success fw-bold"),
            Node::styled_text(format!("Joined: {}", self.joining_date), "text-muted small"),
        ];

        for action in &self.actions {
            let (label, tone) = match action {
                Action::Edit { .. } => ("Edit", Tone::Warning),
                Action::Delete { .. } => ("Delete", Tone::Danger),
                Action::Submit => continue,
            };
            children.push(Node::Button {
                label: label.to_string(),
                tone,
                outline: true,
                action: action.clone(),
            });
        }

        Node::Card {
            key: self.id.clone(),
            image: self.image.clone(),
            children,
        }
    }
}

/// One card per record, in store order.
pub fn employee_cards(records: &[EmployeeRecord], config: &RosterConfig) -> Vec<EmployeeCard> {
    records
        .iter()
        .map(|record| EmployeeCard::from_record(record, &config.currency_symbol))
        .collect()
}

/// The card grid, three cards per row on wide layouts.
pub fn render_list(records: &[EmployeeRecord], config: &RosterConfig) -> Node {
    Node::Row {
        children: employee_cards(records, config)
            .iter()
            .map(|card| Node::Column {
                span: 4,
                children: vec![card.to_node()],
            })
            .collect(),
    }
}

/// Layout of the form: rows of (field, column span).
const FORM_ROWS: [&[(Field, u8)]; 6] = [
    &[(Field::FirstName, 6), (Field::LastName, 6)],
    &[(Field::Email, 6), (Field::Phone, 6)],
    &[(Field::Designation, 6), (Field::Salary, 6)],
    &[(Field::Gender, 6), (Field::Department, 6)],
    &[(Field::Image, 12)],
    &[(Field::JoiningDate, 6), (Field::Status, 6)],
];

fn field_view<S: SessionStorage>(form: &EmployeeForm<S>, field: Field) -> FormFieldView {
    let (label, input, placeholder, options): (&str, InputKind, Option<&str>, Vec<SelectOption>) =
        match field {
            Field::FirstName => ("First Name", InputKind::Text, Some("Enter firstName"), vec![]),
            Field::LastName => ("Last Name", InputKind::Text, Some("Enter lastName"), vec![]),
            Field::Email => ("Email", InputKind::Email, Some("Enter email address"), vec![]),
            Field::Phone => ("Phone", InputKind::Text, Some("Enter phone number"), vec![]),
            Field::Designation => {
                ("Designation", InputKind::Text, Some("Enter designation"), vec![])
            }
            Field::Salary => ("Salary", InputKind::Number, Some("Enter salary"), vec![]),
            Field::Image => ("Profile Image URL", InputKind::Text, Some("image URL here"), vec![]),
            Field::JoiningDate => ("Joining Date", InputKind::Date, None, vec![]),
            Field::Gender => (
                "Gender",
                InputKind::Select,
                None,
                std::iter::once(SelectOption::prompt("Select Gender"))
                    .chain(Gender::ALL.iter().map(|g| SelectOption::of(g.as_str())))
                    .collect(),
            ),
            Field::Department => (
                "Department",
                InputKind::Select,
                None,
                std::iter::once(SelectOption::prompt("Select Department"))
                    .chain(Department::ALL.iter().map(|d| SelectOption::of(d.as_str())))
                    .collect(),
            ),
            Field::Status => (
                "Status",
                InputKind::Select,
                None,
                std::iter::once(SelectOption::prompt("Select Status"))
                    .chain(Status::ALL.iter().map(|s| SelectOption::of(s.as_str())))
                    .collect(),
            ),
        };

    FormFieldView {
        field,
        label: label.to_string(),
        input,
        value: form.draft().get(field).to_string(),
        placeholder: placeholder.map(str::to_string),
        options,
        error: form.error(field).map(str::to_string),
    }
}

/// The form: every field laid out in rows, then the submit button.
pub fn render_form<S: SessionStorage>(form: &EmployeeForm<S>) -> Node {
    let mut children: Vec<Node> = FORM_ROWS
        .iter()
        .map(|row| Node::Row {
            children: row
                .iter()
                .map(|(field, span)| Node::Column {
                    span: *span,
                    children: vec![Node::FormField(field_view(form, *field))],
                })
                .collect(),
        })
        .collect();

    children.push(Node::Button {
        label: form.submit_label().to_string(),
        tone: Tone::Primary,
        outline: false,
        action: Action::Submit,
    });

    Node::Container {
        class: Some("form-box".to_string()),
        children,
    }
}

/// The whole employee manager: title, form, card grid.
pub fn render_manager<S: SessionStorage>(form: &EmployeeForm<S>, config: &RosterConfig) -> Node {
    Node::Container {
        class: Some("main-container".to_string()),
        children: vec![
            Node::Heading {
                level: 2,
                text: "Employee Management System".to_string(),
            },
            render_form(form),
            render_list(form.store().records(), config),
        ],
    }
}
