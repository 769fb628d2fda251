// SPDX-License-Identifier: MPL-2.0
//! Screen parameters and their declared shapes.

use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl ParamValue {
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Number(_) => ParamKind::Number,
            ParamValue::Text(_) => ParamKind::Text,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            ParamValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Number(_) => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Number,
    Text,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Number => f.write_str("number"),
            ParamKind::Text => f.write_str("text"),
        }
    }
}

/// Parameter record passed along with a transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// One declared field of a screen's parameter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamField {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl ParamField {
    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// Shape of the parameters a screen accepts. An empty spec means the screen
/// takes no parameters at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSpec {
    fields: Vec<ParamField>,
}

/// Why a set of parameters does not satisfy a [`ParamSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamMismatch {
    /// Parameters are required but none were supplied.
    Missing,
    /// Describes the offending field.
    Invalid(String),
}

impl ParamSpec {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(fields: impl IntoIterator<Item = ParamField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[ParamField] {
        &self.fields
    }

    #[must_use]
    pub fn accepts_params(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Whether a transition must carry parameters.
    #[must_use]
    pub fn requires_params(&self) -> bool {
        self.fields.iter().any(|f| f.required)
    }

    /// Checks `params` against this spec. Absent and empty records are
    /// treated alike.
    pub fn check(&self, params: Option<&Params>) -> Result<(), ParamMismatch> {
        let params = match params {
            Some(p) if !p.is_empty() => p,
            _ if self.requires_params() => return Err(ParamMismatch::Missing),
            _ => return Ok(()),
        };

        if !self.accepts_params() {
            return Err(ParamMismatch::Invalid(
                "screen does not take parameters".to_string(),
            ));
        }

        for (name, value) in params.iter() {
            let Some(field) = self.fields.iter().find(|f| f.name == name) else {
                return Err(ParamMismatch::Invalid(format!("unknown field '{name}'")));
            };
            if value.kind() != field.kind {
                return Err(ParamMismatch::Invalid(format!(
                    "field '{name}' expects {}, got {}",
                    field.kind,
                    value.kind()
                )));
            }
            if let ParamValue::Number(n) = value {
                if !n.is_finite() {
                    return Err(ParamMismatch::Invalid(format!(
                        "field '{name}' is not a finite number: {n}"
                    )));
                }
            }
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| f.required && params.get(f.name).is_none())
        {
            return Err(ParamMismatch::Invalid(format!(
                "missing required field '{}'",
                missing.name
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_like() -> ParamSpec {
        ParamSpec::new([
            ParamField::optional("delay", ParamKind::Number),
            ParamField::optional("text", ParamKind::Text),
        ])
    }

    fn profile_like() -> ParamSpec {
        ParamSpec::new([ParamField::required("user_id", ParamKind::Text)])
    }

    #[test]
    fn empty_spec_accepts_absent_params() {
        assert_eq!(ParamSpec::none().check(None), Ok(()));
        assert_eq!(ParamSpec::none().check(Some(&Params::new())), Ok(()));
    }

    #[test]
    fn empty_spec_rejects_supplied_params() {
        let params = Params::new().with("delay", 1.0);
        assert!(matches!(
            ParamSpec::none().check(Some(&params)),
            Err(ParamMismatch::Invalid(_))
        ));
    }

    #[test]
    fn optional_fields_may_be_omitted() {
        let spec = loader_like();
        assert_eq!(spec.check(None), Ok(()));
        assert_eq!(spec.check(Some(&Params::new().with("text", "hi"))), Ok(()));
        assert_eq!(
            spec.check(Some(&Params::new().with("delay", 500.0).with("text", "hi"))),
            Ok(())
        );
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let err = loader_like()
            .check(Some(&Params::new().with("delay", "soon")))
            .unwrap_err();
        assert_eq!(
            err,
            ParamMismatch::Invalid("field 'delay' expects number, got text".into())
        );
    }

    #[test]
    fn non_finite_number_is_rejected() {
        for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = loader_like()
                .check(Some(&Params::new().with("delay", n).with("text", "hi")))
                .unwrap_err();
            assert!(matches!(err, ParamMismatch::Invalid(reason) if reason.contains("'delay'")));
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = loader_like()
            .check(Some(&Params::new().with("colour", "red")))
            .unwrap_err();
        assert_eq!(err, ParamMismatch::Invalid("unknown field 'colour'".into()));
    }

    #[test]
    fn required_spec_rejects_absent_params() {
        assert_eq!(profile_like().check(None), Err(ParamMismatch::Missing));
        assert_eq!(
            profile_like().check(Some(&Params::new())),
            Err(ParamMismatch::Missing)
        );
    }

    #[test]
    fn required_field_must_be_present() {
        let spec = ParamSpec::new([
            ParamField::required("user_id", ParamKind::Text),
            ParamField::optional("tab", ParamKind::Text),
        ]);
        let err = spec
            .check(Some(&Params::new().with("tab", "posts")))
            .unwrap_err();
        assert_eq!(
            err,
            ParamMismatch::Invalid("missing required field 'user_id'".into())
        );
    }
}
