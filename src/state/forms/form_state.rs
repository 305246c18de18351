//! Contact form structure and focus navigation

use super::field::{FieldId, FormField};
use crate::validation::RatingTriple;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Focus order of the form; the action row follows the last field
const FIELD_ORDER: [FieldId; 8] = [
    FieldId::Name,
    FieldId::Surname,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Address,
    FieldId::Rating1,
    FieldId::Rating2,
    FieldId::Rating3,
];

/// Index of the action row in the focus ring
pub const ACTIONS_ROW: usize = FIELD_ORDER.len();

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Submit,
    Clear,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Clear];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Clear => "Clear",
        }
    }
}

/// The contact form: five text fields and three rating sliders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FormField; 8],
    pub active_field_index: usize,
    /// Which button is selected when on the action row
    pub selected_button: usize,
}

impl ContactForm {
    pub fn new(default_rating: u8) -> Self {
        Self {
            fields: FIELD_ORDER.map(|id| {
                if id.is_rating() {
                    FormField::rating(id, default_rating)
                } else {
                    FormField::text(id)
                }
            }),
            active_field_index: 0,
            selected_button: 0,
        }
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[Self::index_of(id)]
    }

    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[Self::index_of(id)]
    }

    pub fn text(&self, id: FieldId) -> &str {
        self.field(id).as_text()
    }

    pub fn ratings(&self) -> RatingTriple {
        RatingTriple(FieldId::RATINGS.map(|id| self.field(id).as_rating()))
    }

    /// The field under focus, `None` on the action row
    pub fn active_field_id(&self) -> Option<FieldId> {
        FIELD_ORDER.get(self.active_field_index).copied()
    }

    /// Returns true if the action row is currently active
    pub fn is_actions_row_active(&self) -> bool {
        self.active_field_index == ACTIONS_ROW
    }

    pub fn selected(&self) -> FormButton {
        FormButton::ALL[self.selected_button % FormButton::ALL.len()]
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % FormButton::ALL.len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = FormButton::ALL.len() - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Mark every field as touched so all errors become visible
    pub fn touch_all(&mut self) {
        for field in &mut self.fields {
            field.touched = true;
        }
    }

    fn index_of(id: FieldId) -> usize {
        match id {
            FieldId::Name => 0,
            FieldId::Surname => 1,
            FieldId::Email => 2,
            FieldId::Phone => 3,
            FieldId::Address => 4,
            FieldId::Rating1 => 5,
            FieldId::Rating2 => 6,
            FieldId::Rating3 => 7,
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        ACTIONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTIONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = ContactForm::new(5);
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.selected(), FormButton::Submit);
        assert_eq!(form.text(FieldId::Name), "");
        assert_eq!(form.ratings(), RatingTriple([5, 5, 5]));
        assert!(FIELD_ORDER.iter().all(|id| !form.field(*id).touched));
    }

    #[test]
    fn test_field_count_includes_actions_row() {
        let form = ContactForm::new(5);
        assert_eq!(form.field_count(), 9);
    }

    #[test]
    fn test_active_field_follows_focus_order() {
        let mut form = ContactForm::new(5);
        form.set_active_field(3);
        assert_eq!(form.active_field_id(), Some(FieldId::Phone));
        form.set_active_field(7);
        assert_eq!(form.active_field_id(), Some(FieldId::Rating3));
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = ContactForm::new(5);
        for _ in 0..form.field_count() {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_prev_field_wraps_to_actions_row() {
        let mut form = ContactForm::new(5);
        form.prev_field();
        assert!(form.is_actions_row_active());
        assert!(form.active_field_id().is_none());
        assert!(form.get_active_field_mut().is_none());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = ContactForm::new(5);
        form.set_active_field(100);
        assert_eq!(form.active_field_index, ACTIONS_ROW);
    }

    #[test]
    fn test_buttons_wrap() {
        let mut form = ContactForm::new(5);
        form.prev_button();
        assert_eq!(form.selected(), FormButton::Clear);
        form.next_button();
        assert_eq!(form.selected(), FormButton::Submit);
    }

    #[test]
    fn test_field_mut_targets_named_field() {
        let mut form = ContactForm::new(5);
        form.field_mut(FieldId::Email).push_char('a');
        assert_eq!(form.text(FieldId::Email), "a");
        assert_eq!(form.text(FieldId::Name), "");
    }

    #[test]
    fn test_touch_all() {
        let mut form = ContactForm::new(5);
        form.touch_all();
        assert!(FIELD_ORDER.iter().all(|id| form.field(*id).touched));
    }
}
