//! Dialogue steps and collected fields.
//!
//! The intake dialogue is a fixed sequence of questions. Each collecting
//! step stores the user's answer under one field and hands over to the
//! next step; the sequence ends in a review/confirm step.

use serde::{Deserialize, Serialize};

/// Maximum length of the event description, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// The current step of an intake dialogue.
///
/// Steps flow in a fixed order:
/// `Name → Date → Time → Region → Description → Participation → Confirm`,
/// with `Idle` before the dialogue starts and after it ends. The only
/// deviations are the description retry-in-place and edit jumps from
/// `Confirm` back into a collecting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// No dialogue in progress; waiting for the start command.
    Idle,
    /// Asking for the event name.
    Name,
    /// Asking for the event date.
    Date,
    /// Asking for the start time.
    Time,
    /// Asking for the city and region.
    Region,
    /// Asking for a short description (length-checked).
    Description,
    /// Asking how to participate.
    Participation,
    /// Showing the summary; waiting for submit or edit.
    Confirm,
}

impl Step {
    /// Returns the step that follows this one in the fixed sequence.
    ///
    /// `Confirm` and `Idle` have no successor and return `Idle`.
    pub fn next(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Name => Self::Date,
            Self::Date => Self::Time,
            Self::Time => Self::Region,
            Self::Region => Self::Description,
            Self::Description => Self::Participation,
            Self::Participation => Self::Confirm,
            Self::Confirm => Self::Idle,
        }
    }

    /// Returns the field this step collects, if it is a collecting step.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Name => Some(Field::Name),
            Self::Date => Some(Field::Date),
            Self::Time => Some(Field::Time),
            Self::Region => Some(Field::Region),
            Self::Description => Some(Field::Description),
            Self::Participation => Some(Field::Participation),
            Self::Idle | Self::Confirm => None,
        }
    }

    /// Returns true if this step stores user input under a field.
    pub fn is_collecting(&self) -> bool {
        self.field().is_some()
    }

    /// Returns the question asked when the dialogue enters this step.
    ///
    /// `Idle` and `Confirm` do not ask a question of their own; the
    /// confirm step is entered through the rendered summary instead.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Name => "1\u{fe0f}\u{20e3} Как называется мероприятие?",
            Self::Date => {
                "2\u{fe0f}\u{20e3} Укажите дату проведения (например, 15.06.2025 или 15–17.06.2025):"
            }
            Self::Time => {
                "3\u{fe0f}\u{20e3} Во сколько начинается мероприятие? (например, 14:00 или 14:00–17:00):"
            }
            Self::Region => "4\u{fe0f}\u{20e3} Где проходит мероприятие? (город и регион):",
            Self::Description => "5\u{fe0f}\u{20e3} Кратко опишите мероприятие (до 300 символов):",
            Self::Participation => {
                "6\u{fe0f}\u{20e3} Как принять участие? (ссылка, телефон, форма и т.д.):"
            }
            Self::Idle | Self::Confirm => "",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Idle
    }
}

/// One of the six pieces of event data the dialogue collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Date,
    Time,
    Region,
    Description,
    Participation,
}

impl Field {
    /// Returns the summary label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Название",
            Self::Date => "Дата",
            Self::Time => "Время",
            Self::Region => "Регион",
            Self::Description => "Описание",
            Self::Participation => "Как принять участие",
        }
    }

    /// Returns the collecting step for this field.
    pub fn step(&self) -> Step {
        match self {
            Self::Name => Step::Name,
            Self::Date => Step::Date,
            Self::Time => Step::Time,
            Self::Region => Step::Region,
            Self::Description => Step::Description,
            Self::Participation => Step::Participation,
        }
    }

    /// Returns the re-ask question used when the user edits this field.
    pub fn edit_prompt(&self) -> &'static str {
        match self {
            Self::Name => "Введите новое название:",
            Self::Date => "Введите новую дату:",
            Self::Time => "Введите новое время:",
            Self::Region => "Введите новый регион:",
            Self::Description => "Новое описание (до 300 символов):",
            Self::Participation => "Как принять участие:",
        }
    }
}

/// Edit keywords matched against the user's message in the confirm step.
///
/// Checked in this exact order; the first keyword found as a substring
/// wins. The order is pinned to the field sequence so that a message
/// containing several keywords resolves deterministically.
pub const EDIT_KEYWORDS: &[(&str, Field)] = &[
    ("название", Field::Name),
    ("дата", Field::Date),
    ("время", Field::Time),
    ("регион", Field::Region),
    ("описание", Field::Description),
    ("участие", Field::Participation),
];
