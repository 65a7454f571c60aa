#![no_main]

use libfuzzer_sys::fuzz_target;
use rangelog_git::LogEntry;

fuzz_target!(|data: &[u8]| {
    let Ok(message) = std::str::from_utf8(data) else {
        return;
    };
    let entry = LogEntry {
        sha: "0".repeat(40),
        author: "Fuzz".to_string(),
        author_email: "fuzz@example.com".to_string(),
        author_time: chrono::DateTime::<chrono::Utc>::UNIX_EPOCH.fixed_offset(),
        message: message.to_string(),
    };

    // Exactly one line of the rendered entry may look like a commit header
    let rendered = entry.render();
    let headers = rendered
        .lines()
        .filter(|line| line.starts_with("commit "))
        .count();
    assert_eq!(headers, 1);
});
