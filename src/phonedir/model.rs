use crate::error::{DirectoryError, FieldError, Result, ValidationErrors};
use crate::validation::{self, FieldRole};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the six record fields.
///
/// Order matches the persisted layout and the numbered menu shown by `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

/// Static description of a field: how it is named, validated and accessed.
pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub label: &'static str,
    pub role: FieldRole,
    get: fn(&Record) -> &str,
    set: fn(&mut Record, String),
}

static FIELD_TABLE: [FieldSpec; 6] = [
    FieldSpec {
        field: Field::LastName,
        name: "last_name",
        label: "Last name",
        role: FieldRole::Name,
        get: |r| r.last_name.as_str(),
        set: |r, v| r.last_name = v,
    },
    FieldSpec {
        field: Field::FirstName,
        name: "first_name",
        label: "First name",
        role: FieldRole::Name,
        get: |r| r.first_name.as_str(),
        set: |r, v| r.first_name = v,
    },
    FieldSpec {
        field: Field::MiddleName,
        name: "middle_name",
        label: "Middle name",
        role: FieldRole::Name,
        get: |r| r.middle_name.as_str(),
        set: |r, v| r.middle_name = v,
    },
    FieldSpec {
        field: Field::Organization,
        name: "organization",
        label: "Organization",
        role: FieldRole::Name,
        get: |r| r.organization.as_str(),
        set: |r, v| r.organization = v,
    },
    FieldSpec {
        field: Field::WorkPhone,
        name: "work_phone",
        label: "Work phone",
        role: FieldRole::Phone,
        get: |r| r.work_phone.as_str(),
        set: |r, v| r.work_phone = v,
    },
    FieldSpec {
        field: Field::PersonalPhone,
        name: "personal_phone",
        label: "Personal phone",
        role: FieldRole::Phone,
        get: |r| r.personal_phone.as_str(),
        set: |r, v| r.personal_phone = v,
    },
];

impl Field {
    pub const ALL: [Field; 6] = [
        Field::LastName,
        Field::FirstName,
        Field::MiddleName,
        Field::Organization,
        Field::WorkPhone,
        Field::PersonalPhone,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_TABLE[self as usize]
    }

    /// Persisted key and query name, e.g. `first_name`.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Human label, e.g. `First name`.
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn role(self) -> FieldRole {
        self.spec().role
    }

    /// 1-based position in the edit menu.
    pub fn position(self) -> usize {
        self as usize + 1
    }

    pub fn from_position(position: usize) -> Option<Field> {
        position
            .checked_sub(1)
            .and_then(|i| Field::ALL.get(i).copied())
    }

    /// Parses a menu selection typed by the user (`"1"` .. `"6"`).
    pub fn from_selection(input: &str) -> Result<Field> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(Field::from_position)
            .ok_or_else(|| DirectoryError::UnknownField(input.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        FIELD_TABLE
            .iter()
            .find(|spec| spec.name == s)
            .map(|spec| spec.field)
            .ok_or_else(|| DirectoryError::UnknownField(s.to_string()))
    }
}

/// Raw, unvalidated field values as read from a file or typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordData {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl RecordData {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::LastName => &self.last_name,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::Organization => &self.organization,
            Field::WorkPhone => &self.work_phone,
            Field::PersonalPhone => &self.personal_phone,
        }
    }

    /// Builds from values listed in [`Field::ALL`] order.
    pub fn from_values(values: [String; 6]) -> Self {
        let [last_name, first_name, middle_name, organization, work_phone, personal_phone] =
            values;
        Self {
            last_name,
            first_name,
            middle_name,
            organization,
            work_phone,
            personal_phone,
        }
    }
}

/// One validated contact entry.
///
/// Fields are private: a `Record` can only come out of a validated constructor,
/// and edits produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    last_name: String,
    first_name: String,
    middle_name: String,
    organization: String,
    work_phone: String,
    personal_phone: String,
}

impl Record {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
        organization: impl Into<String>,
        work_phone: impl Into<String>,
        personal_phone: impl Into<String>,
    ) -> std::result::Result<Self, ValidationErrors> {
        Self::from_data(RecordData {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
            organization: organization.into(),
            work_phone: work_phone.into(),
            personal_phone: personal_phone.into(),
        })
    }

    /// Validates every field and collects all failures.
    pub fn from_data(data: RecordData) -> std::result::Result<Self, ValidationErrors> {
        let errors: Vec<FieldError> = Field::ALL
            .into_iter()
            .filter_map(|field| validation::validate(field, data.value(field)).err())
            .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(Self {
            last_name: data.last_name,
            first_name: data.first_name,
            middle_name: data.middle_name,
            organization: data.organization,
            work_phone: data.work_phone,
            personal_phone: data.personal_phone,
        })
    }

    pub fn get(&self, field: Field) -> &str {
        (field.spec().get)(self)
    }

    /// Iterates `(field, value)` pairs in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Returns a copy with one field replaced. Only that field is re-validated.
    pub fn with_field(
        &self,
        field: Field,
        value: impl Into<String>,
    ) -> std::result::Result<Self, FieldError> {
        let value = value.into();
        validation::validate(field, &value)?;
        let mut next = self.clone();
        (field.spec().set)(&mut next, value);
        Ok(next)
    }

    /// String-named variant of [`Record::with_field`].
    pub fn replace_field(&self, name: &str, value: impl Into<String>) -> Result<Self> {
        let field: Field = name.parse()?;
        Ok(self.with_field(field, value)?)
    }

    pub fn to_data(&self) -> RecordData {
        RecordData {
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            organization: self.organization.clone(),
            work_phone: self.work_phone.clone(),
            personal_phone: self.personal_phone.clone(),
        }
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn work_phone(&self) -> &str {
        &self.work_phone
    }

    pub fn personal_phone(&self) -> &str {
        &self.personal_phone
    }
}

impl TryFrom<RecordData> for Record {
    type Error = ValidationErrors;

    fn try_from(data: RecordData) -> std::result::Result<Self, Self::Error> {
        Record::from_data(data)
    }
}

/// The in-memory collection, in insertion/load order. Duplicates are allowed.
pub type Directory = Vec<Record>;
