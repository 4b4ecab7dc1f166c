//! Caption payload flattening.
//!
//! The timedtext endpoint returns `<transcript><text start=".." dur="..">..
//! </text>..</transcript>`. Timing attributes are dropped; fragments are
//! unescaped and joined with single spaces.

use quick_xml::events::Event;
use quick_xml::Reader;

/// Flatten a timedtext XML payload into one transcript string.
pub(crate) fn flatten_transcript(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_text = false;
    let mut fragments: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"text" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"text" => in_text = false,
            Event::Text(e) if in_text => {
                let fragment = e.unescape()?.into_owned();
                if !fragment.is_empty() {
                    fragments.push(fragment);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fragments.join(" "))
}
