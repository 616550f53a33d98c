use std::fmt;

#[derive(Debug)]
pub enum Error {
    ConfigError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Config Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::ConfigError(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_errors_convert_and_keep_their_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();

        assert!(matches!(err, Error::IoError(_)));
        assert_eq!(err.to_string(), "IO Error: port taken");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_errors_have_no_source() {
        let err = Error::ConfigError("LOG_LEVEL is not a known level".to_string());

        assert_eq!(err.to_string(), "Config Error: LOG_LEVEL is not a known level");
        assert!(err.source().is_none());
    }
}
