use crate::{
    constants::{EXTINF_MARKER, URL_PREFIX},
    model::entry::Entry,
};

/// Splits playlist text into lines, accepting `\n`, `\r\n` and bare `\r` as line breaks.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\n', '\r'])
}

/// Pairs every `#EXTINF` line with the URL line that follows it.
///
/// Only the most recent `#EXTINF` line is remembered, so one that is followed by
/// another `#EXTINF` line is dropped. A URL line with no pending `#EXTINF` line
/// is ignored, and so is a trailing `#EXTINF` line with no URL after it.
/// Every other line (header, directives, comments, blanks) is skipped.
pub fn parse_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut pending: Option<&str> = None;
    for line in lines {
        let line = line.trim();
        if line.starts_with(EXTINF_MARKER) {
            pending = Some(line);
        } else if line.starts_with(URL_PREFIX)
            && let Some(extinf) = pending.take()
        {
            entries.push(Entry::new(extinf, line));
        }
    }

    entries
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(text: &str) -> Vec<Entry> {
        parse_lines(lines(text))
    }

    #[test]
    fn pairs_in_file_order() {
        let text = "#EXTM3U\n\
                    #EXTINF:-1 tvg-id=\"a\",Channel A\n\
                    http://a.example/1\n\
                    #EXTINF:-1,Channel B\n\
                    https://b.example/2\n\
                    #EXTINF:-1,Channel C\n\
                    http://c.example/3\n";
        let expected: Vec<Entry> = vec![
            ("#EXTINF:-1 tvg-id=\"a\",Channel A", "http://a.example/1").into(),
            ("#EXTINF:-1,Channel B", "https://b.example/2").into(),
            ("#EXTINF:-1,Channel C", "http://c.example/3").into(),
        ];
        assert_eq!(parse(text), expected);
    }

    #[test]
    fn last_extinf_wins() {
        let text = "#EXTINF:-1,First\n#EXTINF:-1,Second\nhttp://x.example/s\n";
        assert_eq!(
            parse(text),
            vec![Entry::new("#EXTINF:-1,Second", "http://x.example/s")]
        );
    }

    #[test]
    fn orphans_are_dropped() {
        // url before any #EXTINF, a second url for an already consumed #EXTINF,
        // and a dangling #EXTINF at the end
        let text = "http://orphan.example/0\n\
                    #EXTINF:-1,A\n\
                    http://a.example/1\n\
                    http://a.example/again\n\
                    #EXTINF:-1,Dangling";
        assert_eq!(
            parse(text),
            vec![Entry::new("#EXTINF:-1,A", "http://a.example/1")]
        );
    }

    #[test]
    fn other_lines_are_ignored() {
        let text = "#EXTM3U x-tvg-url=\"http://epg.example\"\n\
                    \n\
                    #EXTINF:-1,A\n\
                    #EXTVLCOPT:http-user-agent=foo\n\
                    # a comment\n\
                    \n\
                    rtmp://not.http/stream\n\
                    http://a.example/1\n";
        assert_eq!(
            parse(text),
            vec![Entry::new("#EXTINF:-1,A", "http://a.example/1")]
        );
    }

    #[test]
    fn trims_and_handles_any_line_break() {
        let text = "  #EXTINF:-1,A \r\n\thttp://a.example/1  \r#EXTINF:-1,B\rhttp://b.example/2";
        let expected: Vec<Entry> = vec![
            ("#EXTINF:-1,A", "http://a.example/1").into(),
            ("#EXTINF:-1,B", "http://b.example/2").into(),
        ];
        assert_eq!(parse(text), expected);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("#EXTM3U\n").is_empty());
    }
}
