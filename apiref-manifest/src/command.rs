//! `[commands.*]` tables.

use apiref_core::{ArgKind, Command, DefaultValue, OptionSpec, OptionType, PositionalSpec, TypeRef};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de};

use crate::{Result, validate::ParseContext};

/// A command or namespace declared in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandDef {
    /// `false` marks a pure grouping node with no endpoint of its own.
    #[serde(default = "default_true")]
    pub handler: bool,

    #[serde(default, alias = "description")]
    pub tagline: String,

    /// Response payload type in type notation; absent for plain text.
    #[serde(default, deserialize_with = "deserialize_response")]
    pub response: Option<TypeRef>,

    /// Positional arguments in declaration order.
    #[serde(default)]
    pub args: Vec<ArgDef>,

    /// Options in declaration order.
    #[serde(default)]
    pub options: Vec<OptionDef>,

    #[serde(default)]
    pub commands: IndexMap<String, CommandDef>,
}

pub(crate) fn default_true() -> bool {
    true
}

/// A positional argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgDef {
    pub name: String,
    #[serde(default)]
    pub kind: ArgKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
}

/// A named option. The first name is canonical, the rest are aliases.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionDef {
    pub names: Vec<String>,
    #[serde(rename = "type", default)]
    pub ty: OptionType,
    #[serde(default, deserialize_with = "deserialize_default")]
    pub default: Option<DefaultValue>,
    #[serde(default)]
    pub description: String,
}

fn deserialize_response<'de, D>(deserializer: D) -> std::result::Result<Option<TypeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let notation = String::deserialize(deserializer)?;
    notation.parse().map(Some).map_err(de::Error::custom)
}

fn deserialize_default<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DefaultValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    toml_to_default(&value).map(Some).map_err(de::Error::custom)
}

/// Convert a TOML literal to an option default.
fn toml_to_default(value: &toml::Value) -> std::result::Result<DefaultValue, String> {
    match value {
        toml::Value::Boolean(b) => Ok(DefaultValue::Bool(*b)),
        toml::Value::Integer(i) => Ok(DefaultValue::Int(*i)),
        toml::Value::Float(f) => Ok(DefaultValue::Float(*f)),
        toml::Value::String(s) => Ok(DefaultValue::String(s.clone())),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                toml::Value::String(s) => Ok(s.clone()),
                other => Err(format!(
                    "array defaults may only contain strings, found {}",
                    other.type_str()
                )),
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(DefaultValue::Strings),
        other => Err(format!("unsupported default value type {}", other.type_str())),
    }
}

/// Returns true if `default` is a valid value for an option of type `ty`.
fn default_fits(ty: OptionType, default: &DefaultValue) -> bool {
    match (ty, default) {
        (_, DefaultValue::Null) => true,
        (OptionType::Bool, DefaultValue::Bool(_)) => true,
        (OptionType::Int | OptionType::Int64, DefaultValue::Int(_)) => true,
        (OptionType::Uint | OptionType::Uint64, DefaultValue::Int(i)) => *i >= 0,
        (OptionType::Uint | OptionType::Uint64, DefaultValue::Uint(_)) => true,
        (OptionType::Float64, DefaultValue::Float(_) | DefaultValue::Int(_)) => true,
        (OptionType::String, DefaultValue::String(_)) => true,
        (OptionType::Array, DefaultValue::Strings(_)) => true,
        _ => false,
    }
}

impl CommandDef {
    /// Validate this command and its subcommands.
    pub(crate) fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        for arg in &self.args {
            ctx.validate_name(&arg.name, "argument")?;
        }
        ctx.validate_unique(self.args.iter().map(|a| a.name.as_str()), "argument")?;

        for opt in &self.options {
            let Some(canonical) = opt.names.first() else {
                return Err(ctx.error(
                    format!("{} must declare at least one name", ctx.context_for("option")),
                    None,
                ));
            };
            for name in &opt.names {
                ctx.validate_name(name, "option")?;
            }
            if let Some(default) = &opt.default {
                if !default_fits(opt.ty, default) {
                    return Err(ctx.error(
                        format!(
                            "default of option '{}' is not a valid {} value",
                            canonical,
                            opt.ty.as_str()
                        ),
                        Some(canonical),
                    ));
                }
            }
        }
        ctx.validate_unique(
            self.options.iter().flat_map(|o| o.names.iter().map(String::as_str)),
            "option",
        )?;

        for (name, sub) in &self.commands {
            ctx.validate_command_name(name)?;
            sub.validate(&ctx.push(name))?;
        }
        Ok(())
    }

    /// Build the command node this definition declares.
    pub fn to_command(&self) -> Command {
        let mut cmd = if self.handler {
            Command::handler()
        } else {
            Command::group()
        };
        cmd.tagline = self.tagline.clone();
        cmd.response = self.response.clone();
        cmd.arguments = self.args.iter().map(ArgDef::to_spec).collect();
        cmd.options = self.options.iter().map(OptionDef::to_spec).collect();
        cmd.subcommands = self
            .commands
            .iter()
            .map(|(name, sub)| (name.clone(), sub.to_command()))
            .collect();
        cmd
    }
}

impl ArgDef {
    fn to_spec(&self) -> PositionalSpec {
        PositionalSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            required: self.required,
            kind: self.kind,
        }
    }
}

impl OptionDef {
    fn to_spec(&self) -> OptionSpec {
        OptionSpec {
            names: self.names.clone(),
            description: self.description.clone(),
            ty: self.ty,
            default: self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> CommandDef {
        toml::from_str(src).unwrap()
    }

    #[test]
    fn test_handler_defaults_to_true() {
        let cmd = parse("tagline = \"Add a file\"");
        assert!(cmd.handler);
        assert!(cmd.response.is_none());
        assert!(cmd.to_command().has_handler);
    }

    #[test]
    fn test_args_and_options_keep_order() {
        let cmd = parse(
            r#"
args = [
    { name = "path", kind = "file", required = true },
    { name = "name" },
]
options = [
    { names = ["recursive", "r"], type = "bool", default = false },
    { names = ["hash"], type = "string", default = "sha2-256" },
]
"#,
        );
        let command = cmd.to_command();

        assert_eq!(command.arguments[0].name, "path");
        assert_eq!(command.arguments[0].kind, ArgKind::File);
        assert!(command.arguments[0].required);
        assert_eq!(command.arguments[1].kind, ArgKind::String);
        assert!(!command.arguments[1].required);

        assert_eq!(command.options[0].canonical_name(), "recursive");
        assert_eq!(command.options[0].default, Some(DefaultValue::Bool(false)));
        assert_eq!(
            command.options[1].default,
            Some(DefaultValue::String("sha2-256".into()))
        );
    }

    #[test]
    fn test_response_notation() {
        let cmd = parse("response = \"map[string][Cid]\"");
        assert_eq!(
            cmd.response,
            Some(TypeRef::map(
                TypeRef::string(),
                TypeRef::sequence(TypeRef::named("Cid"))
            ))
        );
    }

    #[test]
    fn test_invalid_response_notation_is_parse_error() {
        let err = toml::from_str::<CommandDef>("response = \"[Cid\"").unwrap_err();
        assert!(err.message().contains("unclosed sequence"));
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        assert!(toml::from_str::<CommandDef>("args = [ { name = \"x\", kind = \"blob\" } ]").is_err());
    }

    #[test]
    fn test_array_default() {
        let cmd = parse(r#"options = [ { names = ["tags"], type = "array", default = ["a", "b"] } ]"#);
        assert_eq!(
            cmd.options[0].default,
            Some(DefaultValue::Strings(vec!["a".into(), "b".into()]))
        );
        assert!(
            toml::from_str::<CommandDef>(r#"options = [ { names = ["n"], default = [1, 2] } ]"#)
                .is_err()
        );
    }

    #[test]
    fn test_default_fits_option_type() {
        assert!(default_fits(OptionType::Bool, &DefaultValue::Bool(true)));
        assert!(default_fits(OptionType::Uint64, &DefaultValue::Int(3)));
        assert!(!default_fits(OptionType::Uint, &DefaultValue::Int(-1)));
        assert!(default_fits(OptionType::Float64, &DefaultValue::Int(1)));
        assert!(!default_fits(OptionType::Bool, &DefaultValue::String("yes".into())));
        assert!(default_fits(OptionType::String, &DefaultValue::Null));
    }

    #[test]
    fn test_nested_subcommands() {
        let cmd = parse(
            r#"
handler = false

[commands.add]
tagline = "Pin objects"

[commands.rm]
"#,
        );
        let command = cmd.to_command();
        assert!(!command.has_handler);
        let names: Vec<_> = command.subcommands.keys().map(String::as_str).collect();
        assert_eq!(names, ["add", "rm"]);
        assert_eq!(command.find("add").unwrap().tagline, "Pin objects");
    }
}
