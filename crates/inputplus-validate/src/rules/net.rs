//! Network addresses.

use std::net::IpAddr;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::constraints::{Constraints, Prevalidated};
use crate::error::Rejection;
use crate::validator::Validator;

const URL_PATTERN: &str = r"^(?:(?:https?|ftp)://)?(?:[^\s:@/]+(?::[^\s:@/]*)?@)?(?:localhost|(?:\d{1,3}\.){3}\d{1,3}|(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63})(?::\d{1,5})?(?:[/?#]\S*)?$";

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(URL_PATTERN)
        .case_insensitive(true)
        .build()
        .expect("URL pattern is a valid regex")
});

/// Accepts IPv4 and IPv6 addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpAddrRule;

impl IpAddrRule {
    pub fn parse(&self, candidate: &str) -> Option<IpAddr> {
        candidate.parse().ok()
    }
}

impl Validator for IpAddrRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }
        match self.parse(candidate) {
            Some(_) => Ok(()),
            None => Err(Rejection::new(format!(
                "'{candidate}' is not a valid IP address."
            ))),
        }
    }
}

/// Accepts http, https and ftp URLs, or bare host names with a domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlRule;

impl Validator for UrlRule {
    fn validate(&self, candidate: &str, constraints: &Constraints) -> Result<(), Rejection> {
        if constraints.prevalidate(candidate)? == Prevalidated::Accepted {
            return Ok(());
        }
        if URL_REGEX.is_match(candidate) {
            Ok(())
        } else {
            Err(Rejection::new(format!("'{candidate}' is not a valid URL.")))
        }
    }
}
