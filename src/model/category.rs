use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{self, Display, Formatter};

lazy_static! {
    // unanchored, and deliberately loose: octets are not range checked
    // and the bracketed part of an IPv6 literal is not validated
    static ref IPV4_URL: Regex = Regex::new(r"https?://(?:\d{1,3}\.){3}\d{1,3}").unwrap();
    static ref IPV6_URL: Regex = Regex::new(r"https?://\[[0-9a-fA-F:]+\]").unwrap();
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Hostname,
    Ipv4,
    Ipv6,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hostname, Category::Ipv4, Category::Ipv6];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Hostname => "OTT",
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
        };

        write!(f, "{}", s)
    }
}

/// Decides which categories a stream URL belongs to.
/// The tests are independent, so one URL can land in several categories.
#[derive(Debug)]
pub struct Classifier {
    hostname: String,
}

impl Classifier {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }

    pub fn matches(&self, category: Category, url: &str) -> bool {
        match category {
            // plain substring search, the host part is not parsed out
            Category::Hostname => url.contains(&self.hostname),
            Category::Ipv4 => IPV4_URL.is_match(url),
            Category::Ipv6 => IPV6_URL.is_match(url),
        }
    }

    pub fn classify<'a>(&'a self, url: &'a str) -> impl Iterator<Item = Category> + 'a {
        Category::ALL
            .into_iter()
            .filter(move |&category| self.matches(category, url))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn categories(url: &str) -> Vec<Category> {
        Classifier::new("ott.mobaibox.com").classify(url).collect()
    }

    #[test]
    fn hostname_is_a_substring_match() {
        assert_eq!(
            categories("http://ott.mobaibox.com/live/1.m3u8"),
            [Category::Hostname]
        );
        assert_eq!(
            categories("http://cdn.example/?src=ott.mobaibox.com"),
            [Category::Hostname]
        );
        assert!(categories("http://mobaibox.com/live").is_empty());
    }

    #[test]
    fn ipv4_literals() {
        assert_eq!(categories("http://203.0.113.5/stream1"), [Category::Ipv4]);
        assert_eq!(categories("https://10.0.0.1:8080/x"), [Category::Ipv4]);
        // no range check on octets
        assert_eq!(categories("http://999.999.999.999/"), [Category::Ipv4]);
        // search is unanchored
        assert_eq!(
            categories("http://proxy.example/?u=http://1.2.3.4"),
            [Category::Ipv4]
        );
        assert!(categories("http://1.2.3/x").is_empty());
        assert!(categories("http://1234.2.3.4/x").is_empty());
        assert!(categories("rtsp://1.2.3.4/x").is_empty());
        assert!(categories("http://example.com/1.2.3.4").is_empty());
    }

    #[test]
    fn ipv6_literals() {
        assert_eq!(categories("http://[2001:db8::1]/stream2"), [Category::Ipv6]);
        assert_eq!(categories("https://[::1]:8080/x"), [Category::Ipv6]);
        assert_eq!(categories("http://[FFFF:abcd]/"), [Category::Ipv6]);
        // no structural validation
        assert_eq!(categories("http://[:::::]/"), [Category::Ipv6]);
        assert!(categories("http://[]/").is_empty());
        assert!(categories("http://[fe80::1%eth0]/").is_empty());
        assert!(categories("http://[2001:db8::1/").is_empty());
    }

    #[test]
    fn categories_are_not_exclusive() {
        assert_eq!(
            categories("http://1.2.3.4/ott.mobaibox.com/stream"),
            [Category::Hostname, Category::Ipv4]
        );
        assert_eq!(
            categories("http://[::1]/relay/http://5.6.7.8/ott.mobaibox.com"),
            Category::ALL
        );
    }

    #[test]
    fn custom_hostname() {
        let classifier = Classifier::new("iptv.example.org");
        assert!(classifier.matches(Category::Hostname, "http://iptv.example.org/a"));
        assert!(!classifier.matches(Category::Hostname, "http://ott.mobaibox.com/a"));
    }
}
