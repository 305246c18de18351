//! Form field value objects

use crate::validation::RatingRange;

/// Identifies one field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Surname,
    Email,
    Phone,
    Address,
    Rating1,
    Rating2,
    Rating3,
}

impl FieldId {
    /// Text fields in display order
    pub const TEXT: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Surname,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
    ];

    /// Rating sliders in display order
    pub const RATINGS: [FieldId; 3] = [FieldId::Rating1, FieldId::Rating2, FieldId::Rating3];

    /// Machine name, used as a log field and JSON key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Surname => "surname",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Rating1 => "rating1",
            Self::Rating2 => "rating2",
            Self::Rating3 => "rating3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Surname => "Surname",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Address => "Address",
            Self::Rating1 => "Rating 1",
            Self::Rating2 => "Rating 2",
            Self::Rating3 => "Rating 3",
        }
    }

    pub fn is_rating(&self) -> bool {
        matches!(self, Self::Rating1 | Self::Rating2 | Self::Rating3)
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Rating(u8),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its value and interaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
    /// Set once the user has typed into or left the field; errors are only
    /// shown for touched fields
    pub touched: bool,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            value: FieldValue::Text(String::new()),
            touched: false,
        }
    }

    /// Create a new rating field
    pub fn rating(id: FieldId, value: u8) -> Self {
        Self {
            id,
            value: FieldValue::Rating(value),
            touched: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    /// Get the text value (returns empty string for rating fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Rating(_) => "",
        }
    }

    /// Get the rating value (returns 0 for text fields)
    pub fn as_rating(&self) -> u8 {
        match &self.value {
            FieldValue::Rating(r) => *r,
            FieldValue::Text(_) => 0,
        }
    }

    /// Replace the text value
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Move a rating by `delta` steps inside `range`
    pub fn adjust_rating(&mut self, delta: i16, range: RatingRange) {
        if let FieldValue::Rating(r) = &mut self.value {
            *r = range.step(*r, delta);
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Rating(r) => r.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty_and_untouched() {
        let field = FormField::text(FieldId::Email);
        assert_eq!(field.as_text(), "");
        assert!(!field.touched);
        assert_eq!(field.label(), "Email");
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::text(FieldId::Name);
        field.push_char('J');
        field.push_char('o');
        assert_eq!(field.as_text(), "Jo");
        field.pop_char();
        assert_eq!(field.as_text(), "J");
    }

    #[test]
    fn test_text_ops_ignore_rating_fields() {
        let mut field = FormField::rating(FieldId::Rating1, 5);
        field.push_char('x');
        field.set_text("abc".to_string());
        assert_eq!(field.as_rating(), 5);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_adjust_rating_respects_range() {
        let range = RatingRange::new(1, 5).unwrap();
        let mut field = FormField::rating(FieldId::Rating2, 4);
        field.adjust_rating(3, range);
        assert_eq!(field.as_rating(), 5);
        field.adjust_rating(-10, range);
        assert_eq!(field.as_rating(), 1);
        assert_eq!(field.display_value(), "1");
    }

    #[test]
    fn test_field_id_partitions() {
        assert!(FieldId::TEXT.iter().all(|f| !f.is_rating()));
        assert!(FieldId::RATINGS.iter().all(|f| f.is_rating()));
        assert_eq!(FieldId::Rating3.as_str(), "rating3");
    }
}
