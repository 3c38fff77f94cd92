use crate::logging::EventLog;
use crate::model::Record;
use std::cell::RefCell;
use std::error::Error;

/// Event log that remembers every message, for asserting on reported conditions.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RefCell<Vec<String>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.borrow().iter().any(|e| e.contains(needle))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl EventLog for RecordingLog {
    fn info(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }

    fn exception(&self, message: &str, err: &dyn Error) {
        self.entries
            .borrow_mut()
            .push(format!("{}: {}", message, err));
    }
}

pub fn sokolov() -> Record {
    Record::new(
        "Соколов",
        "Сергей",
        "Анатольевич",
        "СберБанк",
        "495-555-6666",
        "916-666-7777",
    )
    .expect("valid fixture record")
}

/// Ten records shaped like a typical directory file.
pub fn sample_records() -> Vec<Record> {
    let rows = [
        ("Иванов", "Алексей", "Владимирович", "ООО РосТех", "495-123-4567", "910-555-6789"),
        ("Петрова", "Екатерина", "Андреевна", "ГазПром", "499-987-6543", "916-777-8899"),
        ("Смирнов", "Дмитрий", "Сергеевич", "СберБанк", "495-111-2222", "905-333-4444"),
        ("Козлов", "Анастасия", "Павловна", "РосНефть", "499-444-5555", "916-666-7777"),
        ("Ефимов", "Ирина", "Алексеевна", "ГазПром", "495-777-8888", "910-999-0000"),
        ("Васнецова", "Павел", "Николаевич", "ОАО РЖД", "495-222-3333", "916-111-2222"),
        ("Морозов", "Татьяна", "Ивановна", "Лукойл", "499-555-6666", "905-777-8888"),
        ("Лебедев", "Андрей", "Петрович", "Яндекс", "495-333-4444", "916-222-3333"),
        ("Smith-Jones", "Andrew", "Lee", "Acme Corp", "+1 (212) 555 0100", "212.555.0199"),
        ("Новикова", "Мария", "Андреевна", "Тинькофф", "495-666-7777", "910-444-5555"),
    ];

    rows.into_iter()
        .map(|(last, first, middle, org, work, personal)| {
            Record::new(last, first, middle, org, work, personal).expect("valid fixture record")
        })
        .collect()
}

/// `count` distinct valid records, for pagination tests.
pub fn numbered_records(count: usize) -> Vec<Record> {
    let letters = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
    (0..count)
        .map(|i| {
            let name = format!("Contact {}{}", letters[i / 10 % 10], letters[i % 10]);
            Record::new(
                name,
                "Test",
                "Person",
                "Org",
                format!("495-555-{:04}", i),
                "916-666-7777",
            )
            .expect("valid fixture record")
        })
        .collect()
}
