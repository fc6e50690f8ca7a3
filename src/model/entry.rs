/// One channel of a playlist: its `#EXTINF` line and the URL line following it.
/// Two entries are the same iff both lines are byte-for-byte equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    pub extinf: String,
    pub url: String,
}

impl Entry {
    pub fn new(extinf: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            extinf: extinf.into(),
            url: url.into(),
        }
    }
}

impl<S: Into<String>, T: Into<String>> From<(S, T)> for Entry {
    fn from((extinf, url): (S, T)) -> Self {
        Self::new(extinf, url)
    }
}
