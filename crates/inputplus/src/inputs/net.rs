use std::net::IpAddr;

use inputplus_validate::{IpAddrRule, UrlRule};

use crate::env::Clock;
use crate::terminal::TerminalIO;
use crate::{Prompt, PromptError};

impl<T: TerminalIO, C: Clock> Prompt<T, C> {
    /// Ask for an IPv4 or IPv6 address.
    pub fn input_ip_addr(&self) -> Result<IpAddr, PromptError> {
        let value = self.ask(&IpAddrRule)?;
        value
            .parse()
            .map_err(|e| PromptError::conversion(&value, e))
    }

    /// Ask for a URL.
    pub fn input_url(&self) -> Result<String, PromptError> {
        self.ask(&UrlRule)
    }
}
