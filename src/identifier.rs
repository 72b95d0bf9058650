//! Company code routing
//!
//! Maps a listed-company code to the exchange-specific parameters the cninfo
//! query endpoint requires: the organization id prefix, the `column` token and
//! the `plate` token. The leading character decides the exchange; anything
//! unrecognised falls back to Shanghai.

use std::fmt;

/// Exchange a company code is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    /// Shanghai Stock Exchange (600xxx, 601xxx, 603xxx, 605xxx, 688xxx)
    Shanghai,
    /// Shenzhen Stock Exchange (000xxx, 001xxx, 002xxx, 300xxx, 301xxx)
    Shenzhen,
    /// Beijing Stock Exchange (8xxxxx, 4xxxxx)
    Beijing,
}

impl Exchange {
    /// Determine the exchange from the leading character of a company code
    ///
    /// Codes are not validated: an empty or non-numeric code silently falls
    /// back to Shanghai.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('6') => Exchange::Shanghai,
            Some('0') | Some('3') => Exchange::Shenzhen,
            Some('8') | Some('4') => Exchange::Beijing,
            _ => Exchange::Shanghai,
        }
    }

    /// Prefix prepended to the company code to form the organization id
    pub fn organization_id_prefix(&self) -> &'static str {
        match self {
            Exchange::Shanghai => "gssh0",
            Exchange::Shenzhen => "gssz0",
            Exchange::Beijing => "gsbj0",
        }
    }

    /// Value of the `column` form field
    pub fn column(&self) -> &'static str {
        match self {
            Exchange::Shanghai => "sse",
            Exchange::Shenzhen => "szse",
            Exchange::Beijing => "bse",
        }
    }

    /// Value of the `plate` form field
    pub fn plate(&self) -> &'static str {
        match self {
            Exchange::Shanghai => "sh",
            Exchange::Shenzhen => "sz",
            Exchange::Beijing => "bj",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Exchange::Shanghai => "SSE",
            Exchange::Shenzhen => "SZSE",
            Exchange::Beijing => "BSE",
        };
        write!(f, "{s}")
    }
}

/// Routing parameters derived from a company code
///
/// Nothing is stored: the routing is recomputed from the code whenever needed.
///
/// # Examples
///
/// ```
/// use cninfo_filing_downloader::identifier::MarketRouting;
///
/// let routing = MarketRouting::resolve("000858");
/// assert_eq!(routing.organization_id(), "gssz0000858");
/// assert_eq!(routing.column(), "szse");
/// assert_eq!(routing.plate(), "sz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketRouting {
    company_code: String,
    exchange: Exchange,
}

impl MarketRouting {
    /// Resolve routing parameters for a company code
    pub fn resolve(company_code: &str) -> Self {
        Self {
            company_code: company_code.to_string(),
            exchange: Exchange::from_code(company_code),
        }
    }

    /// Company code this routing was derived from
    pub fn company_code(&self) -> &str {
        &self.company_code
    }

    /// Exchange the code was routed to
    pub fn exchange(&self) -> Exchange {
        self.exchange
    }

    /// Organization id expected by the query endpoint (e.g. "gssh0600887")
    pub fn organization_id(&self) -> String {
        format!("{}{}", self.exchange.organization_id_prefix(), self.company_code)
    }

    /// Value of the `column` form field
    pub fn column(&self) -> &'static str {
        self.exchange.column()
    }

    /// Value of the `plate` form field
    pub fn plate(&self) -> &'static str {
        self.exchange.plate()
    }

    /// Value of the `stock` form field: "{code},{organizationId}"
    pub fn stock_field(&self) -> String {
        format!("{},{}", self.company_code, self.organization_id())
    }
}

impl fmt::Display for MarketRouting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.company_code)
    }
}
