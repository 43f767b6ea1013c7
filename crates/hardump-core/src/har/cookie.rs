//! Cookie formatting into HAR cookie records.
//!
//! Request cookies arrive as flat `(name, value)` pairs and are grouped into
//! `(name, value, attrs)` triples first; response cookies already carry their
//! attributes. Both shapes share [`format_cookies`].

use chrono::{DateTime, TimeDelta, Utc};

use crate::flow::{CookieAttrs, SetCookie};

use super::model::Cookie;
use super::time::format_datetime;

/// Pair names that attach to the preceding cookie instead of starting a new one.
const COOKIE_PARAMS: &[&str] = &[
    "expires", "path", "comment", "max-age", "secure", "httponly", "version",
];

/// Groups Cookie header pairs into `(name, value, attrs)` triples.
/// The first pair always starts a cookie.
pub fn group_cookies(pairs: &[(String, String)]) -> Vec<(String, String, CookieAttrs)> {
    let mut grouped: Vec<(String, String, CookieAttrs)> = Vec::new();
    for (k, v) in pairs {
        let is_param = COOKIE_PARAMS.iter().any(|p| k.eq_ignore_ascii_case(p));
        if is_param {
            if let Some((_, _, attrs)) = grouped.last_mut() {
                attrs.push(k.clone(), v.clone());
                continue;
            }
        }
        grouped.push((k.clone(), v.clone(), CookieAttrs::new()));
    }
    grouped
}

/// Formats request-side cookie pairs.
pub fn format_request_cookies(pairs: &[(String, String)], now: DateTime<Utc>) -> Vec<Cookie> {
    let grouped = group_cookies(pairs);
    format_cookies(
        grouped.iter().map(|(n, v, a)| (n.as_str(), v.as_str(), a)),
        now,
    )
}

/// Formats response-side `Set-Cookie` entries.
pub fn format_response_cookies(fields: &[(String, SetCookie)], now: DateTime<Utc>) -> Vec<Cookie> {
    format_cookies(
        fields
            .iter()
            .map(|(n, c)| (n.as_str(), c.value.as_str(), &c.attrs)),
        now,
    )
}

/// Formats normalized cookie triples, keeping their order.
///
/// Only `path`, `domain` and `comment` are copied. `httpOnly` and `secure`
/// reflect key presence. `expires` is set only when an expiry can be computed.
pub fn format_cookies<'a, I>(cookies: I, now: DateTime<Utc>) -> Vec<Cookie>
where
    I: IntoIterator<Item = (&'a str, &'a str, &'a CookieAttrs)>,
{
    cookies
        .into_iter()
        .map(|(name, value, attrs)| Cookie {
            name: name.to_string(),
            value: value.to_string(),
            path: attrs.get("path").map(str::to_string),
            domain: attrs.get("domain").map(str::to_string),
            comment: attrs.get("comment").map(str::to_string),
            http_only: attrs.contains("httpOnly"),
            secure: attrs.contains("secure"),
            expires: expiration(attrs, now).map(|dt| format_datetime(&dt)),
        })
        .collect()
}

/// Expiry from `expires`, or from `max-age` relative to `now` when `expires`
/// is absent. A zero timestamp counts as no expiry.
pub fn expiration(attrs: &CookieAttrs, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let expires = if let Some(raw) = attrs.get("expires") {
        parse_cookie_date(raw)
    } else if let Some(raw) = attrs.get("max-age") {
        let secs: i64 = raw.trim().parse().ok()?;
        now.checked_add_signed(TimeDelta::try_seconds(secs)?)
    } else {
        None
    };
    expires.filter(|dt| dt.timestamp() != 0 || dt.timestamp_subsec_nanos() != 0)
}

/// HTTP dates (IMF-fixdate, RFC 850, asctime), then RFC 2822 with numeric
/// offsets and the `Wed, 21-Oct-2015 07:28:00 GMT` cookie variant.
/// `UTC` and `UT` zone names are read as GMT.
fn parse_cookie_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let raw = match raw
        .strip_suffix(" UTC")
        .or_else(|| raw.strip_suffix(" UT"))
    {
        Some(head) => format!("{head} GMT"),
        None => raw.to_string(),
    };
    if let Ok(t) = httpdate::parse_http_date(&raw) {
        return Some(DateTime::<Utc>::from(t));
    }
    DateTime::parse_from_rfc2822(&raw)
        .or_else(|_| DateTime::parse_from_rfc2822(&raw.replacen('-', " ", 2)))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_445_412_480, 0).unwrap()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn path_and_secure_only() {
        let attrs: CookieAttrs = [("path", "/app"), ("secure", "")].into_iter().collect();
        let out = format_cookies([("sid", "abc", &attrs)], now());
        assert_eq!(out.len(), 1);
        let json = serde_json::to_value(&out[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "sid",
                "value": "abc",
                "path": "/app",
                "httpOnly": false,
                "secure": true
            })
        );
    }

    #[test]
    fn other_attributes_dropped_and_flags_by_presence() {
        let attrs: CookieAttrs = [
            ("Domain", "example.com"),
            ("SameSite", "Lax"),
            ("HttpOnly", "false"),
            ("Comment", "hi"),
        ]
        .into_iter()
        .collect();
        let out = format_cookies([("a", "1", &attrs)], now());
        let c = &out[0];
        assert_eq!(c.domain.as_deref(), Some("example.com"));
        assert_eq!(c.comment.as_deref(), Some("hi"));
        assert!(c.path.is_none());
        assert!(c.http_only);
        assert!(!c.secure);
        assert!(c.expires.is_none());
    }

    #[test]
    fn expires_attribute_rendered_utc() {
        let attrs: CookieAttrs = [("expires", "Wed, 21 Oct 2015 09:28:00 +0200")]
            .into_iter()
            .collect();
        let out = format_cookies([("a", "1", &attrs)], now());
        assert_eq!(out[0].expires.as_deref(), Some("2015-10-21T07:28:00+00:00"));
    }

    #[test]
    fn expires_dashed_cookie_date() {
        let attrs: CookieAttrs = [("Expires", "Wed, 21-Oct-2015 07:28:00 GMT")]
            .into_iter()
            .collect();
        let dt = expiration(&attrs, now()).unwrap();
        assert_eq!(dt.timestamp(), 1_445_412_480);
    }

    #[test]
    fn expires_rfc850_date() {
        let attrs: CookieAttrs = [("expires", "Wednesday, 21-Oct-15 07:28:00 GMT")]
            .into_iter()
            .collect();
        let dt = expiration(&attrs, now()).unwrap();
        assert_eq!(dt.timestamp(), 1_445_412_480);
    }

    #[test]
    fn expires_asctime_date() {
        let attrs: CookieAttrs = [("expires", "Wed Oct 21 07:28:00 2015")]
            .into_iter()
            .collect();
        let dt = expiration(&attrs, now()).unwrap();
        assert_eq!(dt.timestamp(), 1_445_412_480);
    }

    #[test]
    fn expires_utc_and_ut_zone_names() {
        for raw in [
            "Wed, 21 Oct 2015 07:28:00 UTC",
            "Wed, 21 Oct 2015 07:28:00 UT",
        ] {
            let attrs: CookieAttrs = [("expires", raw)].into_iter().collect();
            let out = format_cookies([("a", "1", &attrs)], now());
            assert_eq!(
                out[0].expires.as_deref(),
                Some("2015-10-21T07:28:00+00:00"),
                "{raw}"
            );
        }
    }

    #[test]
    fn expires_imf_fixdate() {
        let attrs: CookieAttrs = [("expires", "Wed, 21 Oct 2015 07:28:00 GMT")]
            .into_iter()
            .collect();
        let dt = expiration(&attrs, now()).unwrap();
        assert_eq!(dt.timestamp(), 1_445_412_480);
    }

    #[test]
    fn max_age_relative_to_now() {
        let attrs: CookieAttrs = [("Max-Age", "60")].into_iter().collect();
        let dt = expiration(&attrs, now()).unwrap();
        assert_eq!(dt.timestamp(), 1_445_412_540);
    }

    #[test]
    fn unparseable_expiry_omitted() {
        let attrs: CookieAttrs = [("expires", "never"), ("max-age", "60")]
            .into_iter()
            .collect();
        assert!(expiration(&attrs, now()).is_none());
        let attrs: CookieAttrs = [("max-age", "soon")].into_iter().collect();
        assert!(expiration(&attrs, now()).is_none());
    }

    #[test]
    fn epoch_expiry_omitted() {
        let attrs: CookieAttrs = [("expires", "Thu, 01 Jan 1970 00:00:00 GMT")]
            .into_iter()
            .collect();
        assert!(expiration(&attrs, now()).is_none());
    }

    #[test]
    fn group_request_pairs() {
        let grouped = group_cookies(&pairs(&[
            ("a", "1"),
            ("Path", "/"),
            ("b", "2"),
            ("secure", ""),
            ("c", "3"),
        ]));
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].0, "a");
        assert_eq!(grouped[0].2.get("path"), Some("/"));
        assert!(grouped[1].2.contains("secure"));
        assert!(grouped[2].2.is_empty());
    }

    #[test]
    fn leading_param_name_starts_a_cookie() {
        let grouped = group_cookies(&pairs(&[("path", "x"), ("a", "1")]));
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, "path");
    }

    #[test]
    fn request_and_response_shapes_agree() {
        let req = format_request_cookies(&pairs(&[("sid", "1"), ("path", "/")]), now());
        let resp = format_response_cookies(
            &[("sid".to_string(), SetCookie::new("1").with_attr("path", "/"))],
            now(),
        );
        assert_eq!(req, resp);
        assert!(format_request_cookies(&[], now()).is_empty());
    }
}
