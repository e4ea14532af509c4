//! Firebird connection configuration.
use std::{borrow::Cow, env::var, fmt};

use crate::{common::ByteStr, firebird::ProtocolVersion};

/// Default Firebird server port.
pub const DEFAULT_PORT: u16 = 3050;

/// Firebird connection config.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) user: ByteStr,
    pub(crate) pass: ByteStr,
    pub(crate) role: Option<ByteStr>,
    pub(crate) host: ByteStr,
    pub(crate) port: u16,
    pub(crate) dbname: ByteStr,
    pub(crate) protocol: ProtocolVersion,
}

impl Config {
    /// Retrieve configuration from environment variable.
    ///
    /// It reads:
    /// - `ISC_USER`
    /// - `ISC_PASSWORD`
    /// - `FIREBIRD_ROLE`
    /// - `FIREBIRD_HOST`
    /// - `FIREBIRD_PORT`
    /// - `FIREBIRD_DATABASE`
    /// - `FIREBIRD_PROTOCOL`
    ///
    /// Additionally, it also read `DATABASE_URL` to provide missing value from
    /// previous variables before fallback to default value.
    pub fn from_env() -> Config {
        let url = var("DATABASE_URL").ok().and_then(|e|Config::parse_inner(e.into()).ok());

        macro_rules! env {
            ($name:literal,$or:ident,$def:expr) => {
                match (var($name),url.as_ref()) {
                    (Ok(ok),_) => ok.into(),
                    (Err(_),Some(e)) => e.$or.clone(),
                    (Err(_),None) => $def.into(),
                }
            };
        }

        let user = env!("ISC_USER",user,"SYSDBA");
        let pass = env!("ISC_PASSWORD",pass,"");
        let host = env!("FIREBIRD_HOST",host,"localhost");
        let dbname = env!("FIREBIRD_DATABASE",dbname,"");

        let role = match (var("FIREBIRD_ROLE"),url.as_ref()) {
            (Ok(ok),_) => Some(ok.into()),
            (Err(_),Some(e)) => e.role.clone(),
            (Err(_),None) => None,
        };

        let port = match (var("FIREBIRD_PORT"),url.as_ref()) {
            (Ok(ok),_) => ok.parse().unwrap_or(DEFAULT_PORT),
            (Err(_),Some(e)) => e.port,
            (Err(_),None) => DEFAULT_PORT,
        };

        let protocol = match var("FIREBIRD_PROTOCOL").ok().and_then(|e|e.parse().ok()) {
            Some(version) => ProtocolVersion::new(version),
            None => ProtocolVersion::default(),
        };

        Self { user, pass, role, host, port, dbname, protocol }
    }

    /// Parse config from dsn.
    ///
    /// The format is `user:password[:role]@host[:port]/database`. Port
    /// defaults to `3050`, and database path containing `/` is made absolute.
    pub fn parse(dsn: &str) -> Result<Config, ParseError> {
        Self::parse_inner(ByteStr::copy_from_str(dsn))
    }

    /// Parse config from static string dsn.
    ///
    /// This is for micro optimization, see [`Bytes::from_static`][1].
    ///
    /// [1]: bytes::Bytes::from_static
    pub fn parse_static(dsn: &'static str) -> Result<Config, ParseError> {
        Self::parse_inner(ByteStr::from_static(dsn))
    }

    fn parse_inner(dsn: ByteStr) -> Result<Self, ParseError> {
        let Some((credential, location)) = dsn.split_once('@') else {
            return Err(ParseError { reason: "missing `@`".into() });
        };
        let (user, pass) = split1(credential, ':');
        let (pass, role) = split1(pass, ':');
        let (addr, dbname) = split1(location, '/');

        let (host, port) = match addr.split_once(':') {
            Some((host, port)) => match port.parse() {
                Ok(port) => (host, port),
                Err(_) => return Err(ParseError { reason: "invalid port".into() }),
            },
            None => (addr, DEFAULT_PORT),
        };

        let dbname = match dbname.contains('/') {
            true => ByteStr::from(format!("/{dbname}")),
            false => dsn.slice_ref(dbname),
        };

        Ok(Self {
            user: dsn.slice_ref(user),
            pass: dsn.slice_ref(pass),
            role: (!role.is_empty()).then(|| dsn.slice_ref(role)),
            host: dsn.slice_ref(host),
            port,
            dbname,
            protocol: ProtocolVersion::default(),
        })
    }

    /// Set the negotiated protocol version.
    pub fn protocol_version(mut self, protocol: ProtocolVersion) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.pass
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host.as_str(), self.port)
    }

    pub fn database(&self) -> &str {
        &self.dbname
    }

    pub fn protocol(&self) -> ProtocolVersion {
        self.protocol
    }
}

impl std::str::FromStr for Config {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Split `src` at the first `delim`, the second half is empty if not found.
pub fn split1(src: &str, delim: char) -> (&str, &str) {
    src.split_once(delim).unwrap_or((src, ""))
}

/// Error when parsing dsn.
pub struct ParseError {
    pub(crate) reason: Cow<'static,str>,
}

impl std::error::Error for ParseError { }

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.reason)
        }
        write!(f, "failed to parse dsn: {}", self.reason)
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_dsn() {
        let config = Config::parse_static("sysdba:masterkey@localhost:3051/foo/bar.fdb").unwrap();
        assert_eq!(config.user(),"sysdba");
        assert_eq!(config.password(),"masterkey");
        assert_eq!(config.role(),None);
        assert_eq!(config.host(),"localhost");
        assert_eq!(config.port(),3051);
        assert_eq!(config.addr(),"localhost:3051");
        assert_eq!(config.database(),"/foo/bar.fdb");
        assert_eq!(config.protocol(),ProtocolVersion::V13);
    }

    #[test]
    fn default_port_and_role() {
        let config: Config = "user:pass:admin@db.local/employee".parse().unwrap();
        assert_eq!(config.user(),"user");
        assert_eq!(config.password(),"pass");
        assert_eq!(config.role(),Some("admin"));
        assert_eq!(config.addr(),"db.local:3050");
        assert_eq!(config.database(),"employee");
    }

    #[test]
    fn empty_passwd() {
        let config = Config::parse("user@localhost/employee").unwrap();
        assert_eq!(config.user(),"user");
        assert_eq!(config.password(),"");
        assert_eq!(config.role(),None);
    }

    #[test]
    fn invalid_port() {
        let err = Config::parse("user:pass@localhost:fire/employee").unwrap_err();
        assert_eq!(format!("{err:#}"),"invalid port");
    }

    #[test]
    fn missing_at() {
        let err = Config::parse("localhost/employee").unwrap_err();
        assert_eq!(err.to_string(),"failed to parse dsn: missing `@`");
    }

    #[test]
    fn protocol_override() {
        let config = Config::parse("a:b@c/d").unwrap().protocol_version(ProtocolVersion::V12);
        assert_eq!(config.protocol(),ProtocolVersion::V12);
    }

    #[test]
    fn split_first() {
        assert_eq!(split1("a:b:c", ':'), ("a", "b:c"));
        assert_eq!(split1("abc", ':'), ("abc", ""));
        assert_eq!(split1(":", ':'), ("", ""));
    }
}
