use super::controls::{ControlId, ControlKind, FormControls, apply_visibility};
use crate::{models::Gender, rules::visibility_for};

/// Estate the form starts with.
pub const DEFAULT_ESTATE: &str = "100000";

/// Puts every control back to its documented default and re-applies the
/// spouse-group visibility for the default gender.
///
/// | control           | default          |
/// |-------------------|------------------|
/// | `estate`          | `100000`         |
/// | `deceased_gender` | male (`ذكر`)     |
/// | head counts       | `0`              |
/// | presence flags    | unchecked        |
pub fn restore_defaults(form: &mut dyn FormControls) {
    for id in ControlId::ALL {
        match id.kind() {
            ControlKind::Checkbox => form.set_checked(id, false),
            ControlKind::Select => form.set_value(id, Gender::default().as_str()),
            ControlKind::Number if id == ControlId::Estate => form.set_value(id, DEFAULT_ESTATE),
            ControlKind::Number => form.set_value(id, "0"),
        }
    }
    apply_visibility(form, visibility_for(Gender::default()));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::form::{FieldGroup, InMemoryForm, read_request};

    fn dirty_form() -> InMemoryForm {
        let mut form = InMemoryForm::new()
            .with_value(ControlId::Estate, "5")
            .with_value(ControlId::DeceasedGender, "أنثى")
            .with_checked(ControlId::Husband, true)
            .with_checked(ControlId::Mother, true)
            .with_value(ControlId::Sons, "3");
        form.set_group_visible(FieldGroup::Wives, false);
        form
    }

    #[test]
    fn restores_documented_defaults() {
        let mut form = dirty_form();
        restore_defaults(&mut form);

        let request = read_request(&form).unwrap();
        assert_eq!(request.estate, dec!(100000));
        assert_eq!(request.deceased_gender, Gender::Male);
        assert!(!request.husband_present);
        assert!(!request.mother_present);
        assert_eq!(request.sons_count, 0);
        assert_eq!(form.value(ControlId::Wives).as_deref(), Some("0"));
    }

    #[test]
    fn shows_wives_group_for_default_gender() {
        let mut form = dirty_form();
        restore_defaults(&mut form);

        assert!(form.is_group_visible(FieldGroup::Wives));
        assert!(!form.is_group_visible(FieldGroup::Husband));
    }

    #[test]
    fn is_idempotent() {
        let mut once = dirty_form();
        restore_defaults(&mut once);

        let mut twice = dirty_form();
        restore_defaults(&mut twice);
        restore_defaults(&mut twice);

        assert_eq!(once, twice);
    }
}
