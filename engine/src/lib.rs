//! # Roster Engine
//!
//! Logic behind an employee management page: a validated form, an ordered
//! list of employee records mirrored into session storage, and the display
//! tree an external renderer draws.
//!
//! ## Design Principles
//!
//! - **No IO**: storage is injected through [`SessionStorage`]
//! - **Synchronous**: every operation runs to completion in one call
//! - **Typed at the edges**: strings live in the [`FormDraft`] and the
//!   persisted JSON; records use enums and a [`Salary`] value
//! - **Portable**: the [`ffi`] module exposes the form to any host
//!
//! ## Core Concepts
//!
//! ### Validation
//!
//! [`Validator::validate`] maps a draft to per-field messages. Each field
//! is checked on its own; an empty [`ValidationErrors`] means the draft can
//! be written.
//!
//! ### Record Store
//!
//! [`RecordStore`] keeps records in insertion order and writes the whole
//! list to storage after every add, update and remove. A write that fails
//! is not applied in memory either.
//!
//! ### Form
//!
//! [`EmployeeForm`] holds the draft, the errors of the last submit, and the
//! edit target. Submitting adds a record, or replaces the one being edited.
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_engine::{
//!     EmployeeForm, Field, MemoryStorage, RecordStore, RosterConfig, SubmitOutcome,
//! };
//!
//! let config = RosterConfig::default();
//! let store = RecordStore::load(MemoryStorage::new(), &config).unwrap();
//! let mut form = EmployeeForm::new(store);
//!
//! for (field, value) in [
//!     (Field::FirstName, "Alice"),
//!     (Field::LastName, "Lee"),
//!     (Field::Email, "a@b.com"),
//!     (Field::Phone, "1234567890"),
//!     (Field::Gender, "Female"),
//!     (Field::Department, "IT"),
//!     (Field::Designation, "Engineer"),
//!     (Field::Salary, "5000"),
//!     (Field::JoiningDate, "2024-01-01"),
//!     (Field::Image, "http://x/y.png"),
//!     (Field::Status, "Active"),
//! ] {
//!     form.set_field(field, value);
//! }
//!
//! let outcome = form.submit().unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Added { .. }));
//! assert_eq!(form.store().len(), 1);
//!
//! let cards = roster_engine::view::employee_cards(form.store().records(), &config);
//! assert_eq!(cards[0].salary, "5,000");
//! ```
//!
//! ## Persistence
//!
//! The list is stored under one key (default `employees`) as a JSON array
//! of [`EmployeeRecord`]. It is read once by [`RecordStore::load`]; an
//! unreadable value is logged and replaced by an empty list.

pub mod clock;
pub mod config;
pub mod draft;
pub mod error;
pub mod ffi;
pub mod form;
pub mod page;
pub mod record;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod validate;
pub mod view;

// Re-export main types at crate root
pub use clock::IdClock;
pub use config::{ConfigError, RosterConfig};
pub use draft::{Field, FormDraft};
pub use error::Error;
pub use form::{EmployeeForm, FormMode, SubmitOutcome};
pub use page::{Faq, FaqEntry, Footer, Header, NavLink, PageShell};
pub use record::{Department, Employee, EmployeeRecord, Gender, Salary, Status};
pub use snapshot::RecordSnapshot;
pub use storage::{MemoryStorage, SessionStorage};
pub use store::RecordStore;
pub use validate::{validate, ValidationErrors, Validator};
pub use view::{Action, EmployeeCard, Node};

/// Type aliases for clarity
pub type EmployeeId = String;
pub type Timestamp = u64;
