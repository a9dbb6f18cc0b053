//! End-to-end dialogue tests.
//!
//! Exercises the full message-handling path (session store, dialogue
//! step function, record sink) with in-memory adapters, covering the
//! happy path, the edit loop and a failing sink.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use event_intake::adapters::session::InMemorySessionStore;
use event_intake::adapters::sheets::MockRecordSink;
use event_intake::application::{IncomingMessage, ProcessMessageHandler};
use event_intake::domain::conversation::{ChatId, OutboundMessage, SUBMIT_FAILED, SUBMIT_OK};
use event_intake::domain::event::TIMESTAMP_FORMAT;
use event_intake::ports::{Messenger, MessengerError};

// ============================================================================
// Test infrastructure
// ============================================================================

struct CapturingMessenger {
    sent: Mutex<Vec<OutboundMessage>>,
}

impl CapturingMessenger {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    fn last(&self) -> OutboundMessage {
        self.sent().last().expect("no messages sent").clone()
    }
}

#[async_trait]
impl Messenger for CapturingMessenger {
    async fn send(&self, _chat_id: ChatId, message: &OutboundMessage) -> Result<(), MessengerError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct Bot {
    handler: ProcessMessageHandler,
    sink: Arc<MockRecordSink>,
    messenger: Arc<CapturingMessenger>,
}

impl Bot {
    fn new(sink: MockRecordSink) -> Self {
        let sink = Arc::new(sink);
        let messenger = Arc::new(CapturingMessenger::new());
        let handler = ProcessMessageHandler::new(
            Arc::new(InMemorySessionStore::new()),
            sink.clone(),
            messenger.clone(),
        );
        Self {
            handler,
            sink,
            messenger,
        }
    }

    async fn say(&self, text: &str) {
        self.handler
            .handle(IncomingMessage {
                chat_id: ChatId(1),
                text: text.to_string(),
            })
            .await
            .unwrap();
    }
}

const ANSWERS: [&str; 6] = [
    "Фестиваль науки",
    "12.09.2026",
    "14:00",
    "Новосибирск",
    "Лекции и мастер-классы для школьников.",
    "Регистрация: https://example.com",
];

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn full_dialogue_appends_one_record() {
    let bot = Bot::new(MockRecordSink::new());

    bot.say("/start").await;
    assert!(bot.messenger.last().text.contains("Как называется мероприятие?"));

    for answer in ANSWERS {
        bot.say(answer).await;
    }

    // The last reply is the Markdown review summary with every answer.
    let summary = bot.messenger.last();
    assert!(summary.markdown);
    for answer in ANSWERS {
        assert!(summary.text.contains(answer), "summary misses {answer}");
    }
    assert!(bot.sink.appended().is_empty());

    bot.say("отправить").await;
    assert_eq!(bot.messenger.last().text, SUBMIT_OK);

    let appended = bot.sink.appended();
    assert_eq!(appended.len(), 1);
    let row = appended[0].to_row();
    assert_eq!(&row[..6], &ANSWERS);
    assert!(NaiveDateTime::parse_from_str(&row[6], TIMESTAMP_FORMAT).is_ok());
}

#[tokio::test]
async fn after_submission_the_bot_waits_for_the_next_start() {
    let bot = Bot::new(MockRecordSink::new());

    bot.say("/start").await;
    for answer in ANSWERS {
        bot.say(answer).await;
    }
    bot.say("отправить").await;

    // Idle chatter is ignored without a reply.
    let sent_before = bot.messenger.sent().len();
    bot.say("спасибо!").await;
    assert_eq!(bot.messenger.sent().len(), sent_before);

    // A fresh /start begins a second, independent record.
    bot.say("/start").await;
    for answer in ANSWERS {
        bot.say(answer).await;
    }
    bot.say("отправить").await;
    assert_eq!(bot.sink.append_count(), 2);
}

// ============================================================================
// Edit loop
// ============================================================================

#[tokio::test]
async fn editing_a_field_replays_the_tail_of_the_dialogue() {
    let bot = Bot::new(MockRecordSink::new());

    bot.say("/start").await;
    for answer in ANSWERS {
        bot.say(answer).await;
    }

    bot.say("изменить регион").await;
    assert_eq!(bot.messenger.last().text, "Введите новый регион:");

    bot.say("Томск").await;
    bot.say(ANSWERS[4]).await;
    bot.say(ANSWERS[5]).await;

    let summary = bot.messenger.last();
    assert!(summary.markdown);
    assert!(summary.text.contains("Томск"));
    assert!(!summary.text.contains("Новосибирск"));

    bot.say("отправить").await;
    let appended = bot.sink.appended();
    assert_eq!(appended.len(), 1);
    assert_eq!(appended[0].region, "Томск");
}

// ============================================================================
// Failing sink
// ============================================================================

#[tokio::test]
async fn failed_append_is_reported_and_not_retried() {
    let bot = Bot::new(MockRecordSink::failing());

    bot.say("/start").await;
    for answer in ANSWERS {
        bot.say(answer).await;
    }
    bot.say("отправить").await;

    assert_eq!(bot.messenger.last().text, SUBMIT_FAILED);
    assert!(bot.sink.appended().is_empty());

    // The session was reset anyway: repeating the command is ignored.
    let sent_before = bot.messenger.sent().len();
    bot.say("отправить").await;
    assert_eq!(bot.messenger.sent().len(), sent_before);
}
