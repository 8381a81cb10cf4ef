//! Form field identifiers and focus order

/// Identifies a field of the store creation form.
///
/// Also used as the key of per-field validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormFieldId {
    StoreName,
    Domain,
    Country,
    Category,
    Currency,
    Email,
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text edited character by character
    Text,
    /// Cycles through a fixed option set
    Choice,
}

impl FormFieldId {
    /// Fields in the order they are visited with Tab
    pub const ORDER: [FormFieldId; 6] = [
        FormFieldId::StoreName,
        FormFieldId::Domain,
        FormFieldId::Country,
        FormFieldId::Category,
        FormFieldId::Currency,
        FormFieldId::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::StoreName => "Give your online store a name",
            Self::Domain => "Your online store subdomain",
            Self::Country => "Where's your store located?",
            Self::Category => "What's your Category?",
            Self::Currency => "Choose store currency",
            Self::Email => "Store contact email",
        }
    }

    /// Hint shown while a text field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::StoreName => "How'd you like to call your store?",
            Self::Domain => "Enter your preferred domain",
            Self::Email => "you@example.com",
            Self::Country | Self::Category | Self::Currency => "",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::StoreName | Self::Domain | Self::Email => FieldKind::Text,
            Self::Country | Self::Category | Self::Currency => FieldKind::Choice,
        }
    }

    pub fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }
}

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    Field(FormFieldId),
    #[default]
    SubmitButton,
}

impl FormFocus {
    /// Number of focusable elements (fields + submit button)
    pub const COUNT: usize = FormFieldId::ORDER.len() + 1;

    pub fn first() -> Self {
        Self::Field(FormFieldId::ORDER[0])
    }

    fn index(&self) -> usize {
        match self {
            Self::Field(f) => f.index(),
            Self::SubmitButton => FormFieldId::ORDER.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FormFieldId::ORDER
            .get(index)
            .map(|f| Self::Field(*f))
            .unwrap_or(Self::SubmitButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    pub fn prev(&self) -> Self {
        let current = self.index();
        if current == 0 {
            Self::from_index(Self::COUNT - 1)
        } else {
            Self::from_index(current - 1)
        }
    }

    pub fn field(&self) -> Option<FormFieldId> {
        match self {
            Self::Field(f) => Some(*f),
            Self::SubmitButton => None,
        }
    }
}
