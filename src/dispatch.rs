//! Argument shapes for dispatched client operations.
//!
//! Several client operations accept more than one kind of argument:
//! `user(1234)` fetches by id, `user("a@b.com")` fetches by email, and
//! `user(())` builds an empty handle without touching the API. [`Argument`]
//! is the closed set of shapes those operations can receive; each operation
//! pattern-matches it and rejects the shapes it has no handler for with
//! [`TestRailError::UnsupportedArgument`](crate::TestRailError::UnsupportedArgument),
//! naming the shapes it accepts.

use crate::models::{CaseType, Priority, Project, Status, Template, User};

/// The runtime shape of an argument to a dispatched operation.
///
/// Build one via `From`/`Into`; operations take `impl Into<Argument>` so
/// call sites pass ids, strings, models, or `()` directly.
#[derive(Debug, Clone)]
pub enum Argument {
    /// No argument. Spelled `()` at call sites.
    None,
    /// An integer id.
    Id(u64),
    /// A string (e.g., an email address).
    Text(String),
    /// A [`Project`] model.
    Project(Project),
    /// A [`User`] model.
    User(User),
    /// A [`Template`] model.
    Template(Template),
    /// A [`CaseType`] model.
    CaseType(CaseType),
    /// A [`Priority`] model.
    Priority(Priority),
    /// A [`Status`] model.
    Status(Status),
}

impl Argument {
    /// Human-readable name of this shape, used in dispatch error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Argument::None => "no argument",
            Argument::Id(_) => "an integer id",
            Argument::Text(_) => "a string",
            Argument::Project(_) => "a Project",
            Argument::User(_) => "a User",
            Argument::Template(_) => "a Template",
            Argument::CaseType(_) => "a CaseType",
            Argument::Priority(_) => "a Priority",
            Argument::Status(_) => "a Status",
        }
    }
}

impl From<()> for Argument {
    fn from(_: ()) -> Self {
        Argument::None
    }
}

impl From<u64> for Argument {
    fn from(id: u64) -> Self {
        Argument::Id(id)
    }
}

impl From<u32> for Argument {
    fn from(id: u32) -> Self {
        Argument::Id(u64::from(id))
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

macro_rules! model_argument {
    ($model:ident) => {
        impl From<$model> for Argument {
            fn from(model: $model) -> Self {
                Argument::$model(model)
            }
        }

        impl From<&$model> for Argument {
            fn from(model: &$model) -> Self {
                Argument::$model(model.clone())
            }
        }
    };
}

model_argument!(Project);
model_argument!(User);
model_argument!(Template);
model_argument!(CaseType);
model_argument!(Priority);
model_argument!(Status);
