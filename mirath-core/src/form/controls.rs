use std::collections::{BTreeMap, BTreeSet};

use crate::rules::SpouseVisibility;

/// Stable identifiers of the form's input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    Estate,
    DeceasedGender,
    Husband,
    Wives,
    Father,
    Mother,
    Sons,
    Daughters,
    Brothers,
    Sisters,
    Grandfather,
    Grandmother,
    HalfBrothersFather,
    HalfSistersFather,
}

/// How a control holds its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free text parsed as a number.
    Number,
    /// One value out of a fixed list.
    Select,
    /// Checked or not; the text value is unused.
    Checkbox,
}

impl ControlId {
    pub const ALL: [ControlId; 14] = [
        Self::Estate,
        Self::DeceasedGender,
        Self::Husband,
        Self::Wives,
        Self::Father,
        Self::Mother,
        Self::Sons,
        Self::Daughters,
        Self::Brothers,
        Self::Sisters,
        Self::Grandfather,
        Self::Grandmother,
        Self::HalfBrothersFather,
        Self::HalfSistersFather,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Estate => "estate",
            Self::DeceasedGender => "deceased_gender",
            Self::Husband => "husband",
            Self::Wives => "wives",
            Self::Father => "father",
            Self::Mother => "mother",
            Self::Sons => "sons",
            Self::Daughters => "daughters",
            Self::Brothers => "brothers",
            Self::Sisters => "sisters",
            Self::Grandfather => "grandfather",
            Self::Grandmother => "grandmother",
            Self::HalfBrothersFather => "halfbrothers_father",
            Self::HalfSistersFather => "halfsisters_father",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            Self::DeceasedGender => ControlKind::Select,
            Self::Husband
            | Self::Father
            | Self::Mother
            | Self::Grandfather
            | Self::Grandmother => ControlKind::Checkbox,
            Self::Estate
            | Self::Wives
            | Self::Sons
            | Self::Daughters
            | Self::Brothers
            | Self::Sisters
            | Self::HalfBrothersFather
            | Self::HalfSistersFather => ControlKind::Number,
        }
    }
}

/// Conditional groups of the form, shown or hidden as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldGroup {
    Husband,
    Wives,
}

impl FieldGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Husband => "husband_box",
            Self::Wives => "wives_box",
        }
    }
}

/// Access to the page's input controls.
///
/// Hosts back this with whatever widget toolkit they use; [`InMemoryForm`]
/// is the plain implementation used by the terminal host and by tests.
pub trait FormControls {
    /// Raw text of a number or select control; `None` when the control is empty.
    fn value(
        &self,
        id: ControlId,
    ) -> Option<String>;

    fn is_checked(
        &self,
        id: ControlId,
    ) -> bool;

    fn set_value(
        &mut self,
        id: ControlId,
        value: &str,
    );

    fn set_checked(
        &mut self,
        id: ControlId,
        checked: bool,
    );

    fn set_group_visible(
        &mut self,
        group: FieldGroup,
        visible: bool,
    );
}

/// Shows the spouse group that applies and hides the other one.
pub fn apply_visibility(
    form: &mut dyn FormControls,
    visibility: SpouseVisibility,
) {
    form.set_group_visible(FieldGroup::Husband, visibility.show_husband_group);
    form.set_group_visible(FieldGroup::Wives, visibility.show_wives_group);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMemoryForm {
    values: BTreeMap<ControlId, String>,
    checked: BTreeSet<ControlId>,
    hidden_groups: BTreeSet<FieldGroup>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FormControls::set_value`].
    pub fn with_value(
        mut self,
        id: ControlId,
        value: &str,
    ) -> Self {
        self.set_value(id, value);
        self
    }

    /// Builder-style [`FormControls::set_checked`].
    pub fn with_checked(
        mut self,
        id: ControlId,
        checked: bool,
    ) -> Self {
        self.set_checked(id, checked);
        self
    }

    pub fn is_group_visible(
        &self,
        group: FieldGroup,
    ) -> bool {
        !self.hidden_groups.contains(&group)
    }
}

impl FormControls for InMemoryForm {
    fn value(
        &self,
        id: ControlId,
    ) -> Option<String> {
        self.values.get(&id).cloned()
    }

    fn is_checked(
        &self,
        id: ControlId,
    ) -> bool {
        self.checked.contains(&id)
    }

    fn set_value(
        &mut self,
        id: ControlId,
        value: &str,
    ) {
        self.values.insert(id, value.to_string());
    }

    fn set_checked(
        &mut self,
        id: ControlId,
        checked: bool,
    ) {
        if checked {
            self.checked.insert(id);
        } else {
            self.checked.remove(&id);
        }
    }

    fn set_group_visible(
        &mut self,
        group: FieldGroup,
        visible: bool,
    ) {
        if visible {
            self.hidden_groups.remove(&group);
        } else {
            self.hidden_groups.insert(group);
        }
    }
}
