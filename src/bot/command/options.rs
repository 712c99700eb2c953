//! Typed access to slash command options.
//!
//! Serenity's resolved options borrow from the interaction. They are copied into
//! `CommandOption` trees first so command parsing works on plain owned data.

use serenity::all::{ResolvedOption, ResolvedValue};

use crate::{
    error::{internal::InternalError, AppError},
    model::discord::RoleRef,
};

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    String(String),
    Role(RoleRef),
    SubCommand(Vec<CommandOption>),
    SubCommandGroup(Vec<CommandOption>),
    /// Any option type no command declares.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOption {
    pub name: String,
    pub value: OptionValue,
}

impl CommandOption {
    pub fn new(name: &str, value: OptionValue) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn from_resolved(option: &ResolvedOption<'_>) -> Self {
        let value = match &option.value {
            ResolvedValue::Boolean(value) => OptionValue::Boolean(*value),
            ResolvedValue::Integer(value) => OptionValue::Integer(*value),
            ResolvedValue::String(value) => OptionValue::String(value.to_string()),
            ResolvedValue::Role(role) => OptionValue::Role(RoleRef::from(*role)),
            ResolvedValue::SubCommand(options) => OptionValue::SubCommand(from_resolved(options)),
            ResolvedValue::SubCommandGroup(options) => {
                OptionValue::SubCommandGroup(from_resolved(options))
            }
            _ => OptionValue::Unsupported,
        };

        Self::new(option.name, value)
    }
}

/// Copies a list of resolved options.
pub fn from_resolved(options: &[ResolvedOption<'_>]) -> Vec<CommandOption> {
    options.iter().map(CommandOption::from_resolved).collect()
}

fn malformed(name: &str) -> AppError {
    InternalError::MalformedOption(name.to_string()).into()
}

/// Lookup of options by name.
///
/// Missing optional options are `Ok(None)`. An option present with the wrong type is a
/// malformed payload.
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    options: &'a [CommandOption],
}

impl<'a> Options<'a> {
    pub fn new(options: &'a [CommandOption]) -> Self {
        Self { options }
    }

    fn find(&self, name: &str) -> Option<&'a OptionValue> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .map(|option| &option.value)
    }

    /// The invoked subcommand or subcommand group and its options.
    pub fn subcommand(&self) -> Result<(&'a str, Options<'a>), AppError> {
        self.options
            .iter()
            .find_map(|option| match &option.value {
                OptionValue::SubCommand(options) | OptionValue::SubCommandGroup(options) => {
                    Some((option.name.as_str(), Options::new(options)))
                }
                _ => None,
            })
            .ok_or_else(|| malformed("subcommand"))
    }

    pub fn string(&self, name: &str) -> Result<Option<String>, AppError> {
        match self.find(name) {
            None => Ok(None),
            Some(OptionValue::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(malformed(name)),
        }
    }

    pub fn integer(&self, name: &str) -> Result<Option<i64>, AppError> {
        match self.find(name) {
            None => Ok(None),
            Some(OptionValue::Integer(value)) => Ok(Some(*value)),
            Some(_) => Err(malformed(name)),
        }
    }

    /// Integer option narrowed to `i32`, as used by order and padding fields.
    pub fn small_integer(&self, name: &str) -> Result<Option<i32>, AppError> {
        self.integer(name)?
            .map(|value| {
                i32::try_from(value)
                    .map_err(|_| AppError::Validation(format!("The {} is too large", name)))
            })
            .transpose()
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>, AppError> {
        match self.find(name) {
            None => Ok(None),
            Some(OptionValue::Boolean(value)) => Ok(Some(*value)),
            Some(_) => Err(malformed(name)),
        }
    }

    pub fn role(&self, name: &str) -> Result<Option<RoleRef>, AppError> {
        match self.find(name) {
            None => Ok(None),
            Some(OptionValue::Role(role)) => Ok(Some(role.clone())),
            Some(_) => Err(malformed(name)),
        }
    }

    pub fn required_string(&self, name: &str) -> Result<String, AppError> {
        self.string(name)?.ok_or_else(|| malformed(name))
    }

    pub fn required_boolean(&self, name: &str) -> Result<bool, AppError> {
        self.boolean(name)?.ok_or_else(|| malformed(name))
    }

    pub fn required_role(&self, name: &str) -> Result<RoleRef, AppError> {
        self.role(name)?.ok_or_else(|| malformed(name))
    }
}
