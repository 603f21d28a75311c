//! HTML parsing for ddnss.de, which offers no API for reading hosts back.

use scraper::{ElementRef, Html, Selector};
use std::net::IpAddr;

use crate::providers::error::ProviderError;

/// A host listed in the ddnss web interface with the addresses shown next
/// to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedHost {
    pub hostname: String,
    pub addresses: Vec<IpAddr>,
}

fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css).map_err(|e| ProviderError::Parse(format!("selector {css}: {e}")))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// True when the update endpoint answered with an `Updated ...` notice.
pub fn is_update_confirmed(body: &str) -> Result<bool, ProviderError> {
    let document = Html::parse_document(body);
    let font = selector("font")?;
    Ok(document
        .select(&font)
        .any(|node| text_of(node).starts_with("Updated ")))
}

/// Reads the host table of `vhosts_list.php`. Hostnames are the underlined
/// cells; any cell of the same row holding an IP address is attached to the
/// host.
pub fn listed_hosts(body: &str) -> Result<Vec<ListedHost>, ProviderError> {
    let document = Html::parse_document(body);
    let row = selector("tr")?;
    let cell = selector("td")?;
    let underline = selector("u")?;

    let mut hosts = Vec::new();
    for tr in document.select(&row) {
        let Some(name) = tr.select(&underline).next() else {
            continue;
        };
        let hostname = text_of(name).to_ascii_lowercase();
        if hostname.is_empty() {
            continue;
        }
        let addresses = tr
            .select(&cell)
            .filter_map(|td| text_of(td).parse::<IpAddr>().ok())
            .collect();
        hosts.push(ListedHost {
            hostname,
            addresses,
        });
    }

    if hosts.is_empty() {
        hosts = document
            .select(&underline)
            .map(text_of)
            .filter(|hostname| !hostname.is_empty())
            .map(|hostname| ListedHost {
                hostname: hostname.to_ascii_lowercase(),
                addresses: Vec::new(),
            })
            .collect();
    }
    Ok(hosts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_confirmation() {
        let ok = "<html><body><font color=\"green\">Updated 1 hostname.</font></body></html>";
        assert!(is_update_confirmed(ok).unwrap());

        let bad = "<html><body><font color=\"red\">badauth</font></body></html>";
        assert!(!is_update_confirmed(bad).unwrap());
        assert!(!is_update_confirmed("").unwrap());
    }

    #[test]
    fn test_listed_hosts_from_table() {
        let body = r#"<table>
            <tr><th>Host</th><th>IP</th><th>IPv6</th></tr>
            <tr><td><u>MyHost.ddnss.de</u></td><td>1.2.3.4</td><td>2001:db8::1</td></tr>
            <tr><td><u>other.ddnss.de</u></td><td>-</td><td></td></tr>
        </table>"#;
        let hosts = listed_hosts(body).unwrap();
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[0].hostname, "myhost.ddnss.de");
        assert_eq!(
            hosts[0].addresses,
            vec![
                "1.2.3.4".parse::<IpAddr>().unwrap(),
                "2001:db8::1".parse::<IpAddr>().unwrap()
            ]
        );
        assert!(hosts[1].addresses.is_empty());
    }

    #[test]
    fn test_listed_hosts_without_table() {
        let body = "<div><u> a.ddnss.de </u><u>b.ddnss.de</u></div>";
        let hosts = listed_hosts(body).unwrap();
        let names: Vec<_> = hosts.iter().map(|h| h.hostname.as_str()).collect();
        assert_eq!(names, ["a.ddnss.de", "b.ddnss.de"]);
    }
}
