//! The dialogue step function.
//!
//! `ConversationController` drives one session through the fixed question
//! sequence: it stores answers, applies the single validation rule (the
//! description length bound), renders the review summary and interprets
//! the submit/edit commands in the confirm step.
//!
//! The controller is pure: it mutates only the session it is given and
//! returns what should be said next. Actual persistence is requested
//! through [`Advance::Submit`] and performed by the application layer,
//! which also resets the session once the attempt finishes.

use super::session::Session;
use super::step::{Field, Step, EDIT_KEYWORDS, MAX_DESCRIPTION_CHARS};

/// Greeting sent by the start command, ending in the first question.
pub const WELCOME: &str = "\u{1f44b} Здравствуйте! Я помогу вам добавить информацию о мероприятии.\n\n\
     Пожалуйста, ответьте на несколько вопросов.\n\n\
     1\u{fe0f}\u{20e3} Как называется мероприятие?";

/// Re-prompt sent when the description exceeds the length bound.
pub const DESCRIPTION_TOO_LONG: &str =
    "\u{2757} Пожалуйста, уложитесь в 300 символов. Попробуйте снова:";

/// Acknowledgment after the record was appended successfully.
pub const SUBMIT_OK: &str = "\u{1f4e8} Спасибо! Мероприятие добавлено в базу.";

/// Acknowledgment after the record sink reported a failure.
pub const SUBMIT_FAILED: &str = "\u{26a0}\u{fe0f} Не удалось сохранить. Попробуйте позже.";

/// Hint when an edit command named no known field.
pub const EDIT_NOT_UNDERSTOOD: &str = "Не понял. Пример: «изменить дата».";

/// Hint when confirm-step input is neither submit nor edit.
pub const CONFIRM_HINT: &str = "Напишите «отправить» или «изменить [поле]».";

const SUBMIT_TOKEN: &str = "отправить";
const EDIT_TOKEN: &str = "изменить";

/// One message to send back to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub text: String,
    /// Render with Markdown formatting. Only the review summary uses it.
    pub markdown: bool,
}

impl OutboundMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// Result of advancing a session by one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Send these messages; the session was updated in place.
    /// The list is empty when the input warrants no reply (idle chatter).
    Reply(Vec<OutboundMessage>),
    /// The user confirmed submission. The caller must build the record
    /// from the session's fields, hand it to the record sink, reset the
    /// session and acknowledge the outcome.
    Submit,
}

impl Advance {
    fn reply(message: OutboundMessage) -> Self {
        Self::Reply(vec![message])
    }

    fn silent() -> Self {
        Self::Reply(Vec::new())
    }
}

/// Stateless step function over [`Session`].
pub struct ConversationController;

impl ConversationController {
    /// Begins (or restarts) the dialogue: drops collected answers, moves
    /// to the first question and returns the welcome prompt.
    pub fn start(session: &mut Session) -> OutboundMessage {
        session.reset();
        session.set_step(Step::Name);
        OutboundMessage::plain(WELCOME)
    }

    /// Advances the session with one inbound message.
    ///
    /// Dispatches purely on the session's current step. Unknown input is
    /// never an error: collecting steps accept arbitrary text and the
    /// confirm step degrades to a repeat hint.
    pub fn advance(session: &mut Session, input: &str) -> Advance {
        match session.current_step() {
            Step::Idle => Advance::silent(),
            Step::Confirm => Self::confirm(session, input),
            step => Self::collect(session, step, input),
        }
    }

    /// Handles one answer in a collecting step.
    fn collect(session: &mut Session, step: Step, input: &str) -> Advance {
        // Invariant: advance() routes only collecting steps here.
        let field = match step.field() {
            Some(field) => field,
            None => return Advance::silent(),
        };

        if field == Field::Description && input.chars().count() > MAX_DESCRIPTION_CHARS {
            // Retry in place; the stored description is untouched.
            return Advance::reply(OutboundMessage::plain(DESCRIPTION_TOO_LONG));
        }

        session.set_field(field, input);

        if step == Step::Participation {
            let summary = Self::render_summary(session);
            session.set_step(Step::Confirm);
            return Advance::reply(OutboundMessage::markdown(summary));
        }

        let next = step.next();
        session.set_step(next);
        Advance::reply(OutboundMessage::plain(next.prompt()))
    }

    /// Interprets the user's reaction to the summary.
    fn confirm(session: &mut Session, input: &str) -> Advance {
        let text = input.trim().to_lowercase();

        if text.contains(SUBMIT_TOKEN) {
            return Advance::Submit;
        }

        if text.contains(EDIT_TOKEN) {
            for (keyword, field) in EDIT_KEYWORDS {
                if text.contains(keyword) {
                    session.set_step(field.step());
                    return Advance::reply(OutboundMessage::plain(field.edit_prompt()));
                }
            }
            return Advance::reply(OutboundMessage::plain(EDIT_NOT_UNDERSTOOD));
        }

        Advance::reply(OutboundMessage::plain(CONFIRM_HINT))
    }

    /// Renders the Markdown review summary of all six answers.
    pub fn render_summary(session: &Session) -> String {
        let value = |field: Field| session.field(field).unwrap_or_default();
        format!(
            "\u{2705} Проверьте информацию:\n\n\
             *Название:* {}\n\
             *Дата:* {}\n\
             *Время:* {}\n\
             *Регион:* {}\n\
             *Описание:* {}\n\
             *Как принять участие:* {}\n\n\
             Если всё верно — напишите **отправить**.\n\
             Чтобы изменить — напишите «изменить [поле]».",
            value(Field::Name),
            value(Field::Date),
            value(Field::Time),
            value(Field::Region),
            value(Field::Description),
            value(Field::Participation),
        )
    }
}
