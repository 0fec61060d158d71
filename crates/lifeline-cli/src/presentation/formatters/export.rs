use anyhow::Result;
use lifeline_types::CallLogEntry;
use std::io::Write;

/// Write the call log as CSV with the persisted field names as header
pub fn write_call_log<W: Write>(out: W, entries: &[CallLogEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["timestamp", "contactName", "phoneNumber", "type"])?;

    for entry in entries {
        wtr.write_record([
            entry.timestamp.as_str(),
            entry.contact_name.as_str(),
            entry.phone_number.as_str(),
            entry.kind.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_rows() {
        let entries = vec![
            CallLogEntry::new("+15553456789", "David Johnson", "2024-06-01T12:00:00.000Z"),
            CallLogEntry::new("911", "Emergency, Dispatch", "2024-06-01T12:05:00.000Z"),
        ];

        let mut buf = Vec::new();
        write_call_log(&mut buf, &entries).unwrap();

        let text = String::from_utf8(buf).unwrap();
        insta::assert_snapshot!(text, @r#"
        timestamp,contactName,phoneNumber,type
        2024-06-01T12:00:00.000Z,David Johnson,+15553456789,emergency_call
        2024-06-01T12:05:00.000Z,"Emergency, Dispatch",911,emergency_call
        "#);
    }
}
