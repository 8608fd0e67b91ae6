//! Turns a submitted order form into the WhatsApp message and link.

/// One line of an order message.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldEntry {
    /// A filled-in control. `label` is empty when the control has none.
    Value { label: String, value: String },
    /// A checked checkbox, by its label text.
    Confirmed(String),
}

impl FieldEntry {
    /// Entry for a non-checkbox control; `None` when the value is blank.
    pub fn from_value(label: &str, value: &str) -> Option<Self> {
        if value.trim().is_empty() {
            return None;
        }
        Some(FieldEntry::Value {
            label: label.to_string(),
            value: value.to_string(),
        })
    }

    /// Entry for a checkbox; `None` unless it is checked and labelled.
    pub fn from_checkbox(checked: bool, label: Option<&str>) -> Option<Self> {
        match (checked, label) {
            (true, Some(label)) => Some(FieldEntry::Confirmed(label.trim().to_string())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderMessage {
    service: String,
    entries: Vec<FieldEntry>,
}

impl OrderMessage {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            entries: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        let mut text = format!("🟢 *Nouvelle commande — {}*\n\n", self.service);
        for entry in &self.entries {
            match entry {
                FieldEntry::Value { label, value } => {
                    text.push_str(&format!("*{}* : {}\n", label, value));
                }
                FieldEntry::Confirmed(label) => {
                    text.push_str(&format!("✅ {}\n", label));
                }
            }
        }
        text
    }
}

impl Extend<FieldEntry> for OrderMessage {
    fn extend<T: IntoIterator<Item = FieldEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

pub fn deep_link(number: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_field_and_checked_box_follow_header() {
        let mut message = OrderMessage::new("Installation logicielle");
        message.extend(FieldEntry::from_value("Name", "Alice"));
        message.extend(FieldEntry::from_checkbox(true, Some("  Express delivery\n")));

        let text = message.render();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("🟢 *Nouvelle commande — Installation logicielle*"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("*Name* : Alice"));
        assert_eq!(lines.next(), Some("✅ Express delivery"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn blank_values_are_omitted() {
        assert_eq!(FieldEntry::from_value("Remarques", "   "), None);
        assert_eq!(FieldEntry::from_value("Remarques", ""), None);
    }

    #[test]
    fn values_keep_their_original_spacing() {
        assert_eq!(
            FieldEntry::from_value("Nom", " Awa "),
            Some(FieldEntry::Value {
                label: "Nom".into(),
                value: " Awa ".into()
            })
        );
    }

    #[test]
    fn unlabelled_control_gets_empty_label() {
        let mut message = OrderMessage::new("Studio créatif");
        message.extend(FieldEntry::from_value("", "logo"));
        assert!(message.render().ends_with("** : logo\n"));
    }

    #[test]
    fn unchecked_or_unlabelled_checkboxes_are_skipped() {
        assert_eq!(FieldEntry::from_checkbox(false, Some("Antivirus")), None);
        assert_eq!(FieldEntry::from_checkbox(true, None), None);
    }

    #[test]
    fn empty_form_still_has_header() {
        let message = OrderMessage::new("Abonnements streaming");
        assert!(message.is_empty());
        assert_eq!(message.render(), "🟢 *Nouvelle commande — Abonnements streaming*\n\n");
    }

    #[test]
    fn deep_link_percent_encodes_the_text() {
        let link = deep_link("221779411495", "*Nom* : Awa & Co\n");
        assert_eq!(
            link,
            "https://wa.me/221779411495?text=%2ANom%2A%20%3A%20Awa%20%26%20Co%0A"
        );
    }

    #[test]
    fn deep_link_encodes_emoji_as_utf8() {
        let link = deep_link("1", "✅");
        assert_eq!(link, "https://wa.me/1?text=%E2%9C%85");
    }
}
