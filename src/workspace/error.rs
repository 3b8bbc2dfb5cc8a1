extern crate reqwest;
extern crate serde_json;

use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);
#[derive(Debug)]
pub enum Kind {
    Auth,
    Network(reqwest::Error),
    Request(Option<reqwest::StatusCode>),
    Decode(serde_json::Error),
    Io(io::Error),
    NotFound,
    Timeout,
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Auth => write!(f, "Login with browser cookie first!"),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Request(status) => {
                write!(f, "Request failed, please try again!")?;
                if let Some(s) = status {
                    write!(f, " (status {})", s)?;
                }
                self.write_description(f)
            }
            Kind::Decode(err) => write!(f, "Error decoding response: {}", err),
            Kind::Io(err) => write!(f, "Error accessing file: {}", err),
            Kind::NotFound => match &self.0.description {
                Some(d) => write!(f, "{}", d),
                None => write!(f, "Not found"),
            },
            Kind::Timeout => write!(f, "Judge did not report a result, please try again!"),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Network(x) => Some(x),
            Kind::Decode(x) => Some(x),
            Kind::Io(x) => Some(x),
            Kind::Auth | Kind::Request(_) | Kind::NotFound | Kind::Timeout => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::with_kind(Kind::Network(err))
    }
}
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::with_kind(Kind::Decode(err))
    }
}
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::with_kind(Kind::Io(err))
    }
}

pub fn not_found<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::NotFound, description)
}
