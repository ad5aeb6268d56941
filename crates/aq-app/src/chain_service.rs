//! Chain assembly from component specs.

use std::str::FromStr;

use aq_chain::{Chain, ChainBuilder};
use aq_components::{ComponentError, ComponentKind, ParamKind, ParamValue, ParamValues};
use aq_controls::DutyCycleTimer;
use aq_core::ComponentId;

use crate::error::{AppError, AppResult};

/// One component to add to a chain: its kind and named values.
///
/// A predecessor-bearing kind without a `previous` value is wired to the
/// component before it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    pub kind: ComponentKind,
    pub values: ParamValues,
}

impl ComponentSpec {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            values: ParamValues::new(),
        }
    }

    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.values.insert(name, value);
        self
    }
}

impl FromStr for ComponentSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_spec(s)
    }
}

/// Parse `"<Kind> name=value ..."`.
///
/// Values are read according to the kind's declared parameter types;
/// `previous` takes a 0-based chain position, optionally written `#n`.
pub fn parse_spec(text: &str) -> AppResult<ComponentSpec> {
    let mut tokens = text.split_whitespace();
    let kind_name = tokens
        .next()
        .ok_or_else(|| AppError::InvalidInput("empty component spec".to_string()))?;
    let kind = ComponentKind::from_str(kind_name)?;

    let mut spec = ComponentSpec::new(kind);
    for token in tokens {
        let (name, raw) = token.split_once('=').ok_or_else(|| {
            AppError::InvalidInput(format!("expected name=value, got '{}'", token))
        })?;
        let param = kind.param(name).ok_or_else(|| ComponentError::UnknownParam {
            kind: kind.name(),
            name: name.to_string(),
        })?;
        let value = parse_value(param.kind, raw).ok_or_else(|| {
            AppError::InvalidInput(format!(
                "{} parameter '{}': cannot read '{}' as {}",
                kind, name, raw, param.kind
            ))
        })?;
        spec.values.insert(param.name, value);
    }
    Ok(spec)
}

fn parse_value(kind: ParamKind, raw: &str) -> Option<ParamValue> {
    match kind {
        ParamKind::Component => {
            let index = raw.strip_prefix('#').unwrap_or(raw).parse::<u32>().ok()?;
            Some(ParamValue::Component(ComponentId::from_index(index)))
        }
        ParamKind::Integer => match raw.parse::<i64>() {
            Ok(v) => Some(ParamValue::Integer(v)),
            Err(_) => raw.parse::<f64>().ok().map(ParamValue::Float),
        },
        ParamKind::Float => raw.parse::<f64>().ok().map(ParamValue::Float),
        ParamKind::Text => Some(ParamValue::Text(raw.to_string())),
    }
}

/// Build a chain from `specs` in order.
pub fn assemble<T: DutyCycleTimer>(specs: &[ComponentSpec], timer: T) -> AppResult<Chain> {
    let mut builder = ChainBuilder::with_timer(timer);
    for spec in specs {
        builder.add_kind(spec.kind, spec.values.clone())?;
    }
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_container_spec() {
        let spec = parse_spec("Container outflow=5 threshold=10 start_content=0").unwrap();
        assert_eq!(spec.kind, ComponentKind::Container);
        assert_eq!(spec.values.get("outflow"), Some(&ParamValue::Float(5.0)));
        assert_eq!(spec.values.get("threshold"), Some(&ParamValue::Integer(10)));
        assert!(!spec.values.contains("previous"));
    }

    #[test]
    fn parse_previous_and_fractional_integer() {
        let spec = parse_spec("floodDrainContainer previous=#2 start_content=2.5").unwrap();
        assert_eq!(spec.kind, ComponentKind::FloodDrainContainer);
        assert_eq!(
            spec.values.get("previous"),
            Some(&ParamValue::Component(ComponentId::from_index(2)))
        );
        assert_eq!(
            spec.values.get("start_content"),
            Some(&ParamValue::Float(2.5))
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse_spec("   "), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_spec("Tank outflow=1"), Err(AppError::Component(_))));
        assert!(matches!(parse_spec("Pump outflow"), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_spec("Pump speed=3"), Err(AppError::Component(_))));
        assert!(matches!(
            parse_spec("Pump outflow=fast"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
