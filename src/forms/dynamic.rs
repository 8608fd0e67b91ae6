//! Conditional form fields.

use std::collections::HashMap;

use serde::Deserialize;

/// Current state of one controlling input.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Text(String),
    Checked(bool),
}

/// Latest value of every controlling input of a form, keyed by element id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlValues(HashMap<String, ControlValue>);

impl ControlValues {
    pub fn set(&mut self, id: impl Into<String>, value: ControlValue) {
        self.0.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<&ControlValue> {
        self.0.get(id)
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Shown iff the controller's value is exactly this string.
    Equals(String),
    /// Shown iff the controller checkbox is checked.
    Checked,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Visibility {
    pub controller: String,
    pub rule: Rule,
}

impl Visibility {
    pub fn evaluate(&self, controls: &ControlValues) -> bool {
        match (&self.rule, controls.get(&self.controller)) {
            (Rule::Equals(expected), Some(ControlValue::Text(value))) => value == expected,
            (Rule::Checked, Some(ControlValue::Checked(checked))) => *checked,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company_field() -> Visibility {
        Visibility {
            controller: "activation-type".into(),
            rule: Rule::Equals("professionnel".into()),
        }
    }

    #[test]
    fn professional_activation_reveals_company_name() {
        let rule = company_field();
        let mut controls = ControlValues::default();
        assert!(!rule.evaluate(&controls));

        controls.set("activation-type", ControlValue::Text("professionnel".into()));
        assert!(rule.evaluate(&controls));

        controls.set("activation-type", ControlValue::Text("particulier".into()));
        assert!(!rule.evaluate(&controls));
    }

    #[test]
    fn equals_is_exact() {
        let rule = company_field();
        let mut controls = ControlValues::default();
        controls.set("activation-type", ControlValue::Text("Professionnel".into()));
        assert!(!rule.evaluate(&controls));
        controls.set("activation-type", ControlValue::Text("professionnel ".into()));
        assert!(!rule.evaluate(&controls));
    }

    #[test]
    fn checkbox_rule_follows_checked_state() {
        let rule = Visibility {
            controller: "install-office".into(),
            rule: Rule::Checked,
        };
        let mut controls = ControlValues::default();
        controls.set("install-office", ControlValue::Checked(true));
        assert!(rule.evaluate(&controls));
        controls.set("install-office", ControlValue::Checked(false));
        assert!(!rule.evaluate(&controls));
    }

    #[test]
    fn clearing_collapses_everything() {
        let rule = company_field();
        let mut controls = ControlValues::default();
        controls.set("activation-type", ControlValue::Text("professionnel".into()));
        controls.clear();
        assert!(!rule.evaluate(&controls));
    }

    #[test]
    fn rules_deserialize_from_catalog_shape() {
        let equals: Visibility = serde_json::from_str(
            r#"{ "controller": "studio-type", "rule": { "equals": "web" } }"#,
        )
        .unwrap();
        assert_eq!(equals.rule, Rule::Equals("web".into()));

        let checked: Visibility =
            serde_json::from_str(r#"{ "controller": "install-antivirus", "rule": "checked" }"#)
                .unwrap();
        assert_eq!(checked.rule, Rule::Checked);
    }
}
