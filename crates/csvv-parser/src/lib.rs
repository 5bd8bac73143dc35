//! CSVV coefficient-file parsing.
//!
//! A CSVV file encodes a regression's point estimates and covariance
//! matrices: a MetaCSV front-matter header followed by keyword-introduced
//! numeric blocks. Only the girdin-2017-01-10 layout is understood; any
//! other declared version is rejected rather than guessed at.

pub mod error;
mod girdin;
mod header;

pub use error::{CsvvError, CsvvResult};
pub use girdin::GirdinBody;
pub use header::{Header, VariableDef};

/// The single supported file-format version.
pub const SUPPORTED_VERSION: &str = "girdin-2017-01-10";

/// A fully parsed CSVV file.
#[derive(Debug, Clone)]
pub struct Csvv {
    pub header: Header,
    pub body: GirdinBody,
}

impl Csvv {
    /// Interpret CSVV text into header and body.
    ///
    /// Fatal when the header is missing, declares no `csvv-version`, or
    /// declares a version other than [`SUPPORTED_VERSION`].
    pub fn parse(text: &str) -> CsvvResult<Csvv> {
        let lines: Vec<&str> = text.lines().collect();
        let (header, consumed) = header::read_header(&lines)?;

        let version = header
            .attrs
            .get("csvv-version")
            .ok_or(CsvvError::MissingVersion)?;
        if version != SUPPORTED_VERSION {
            return Err(CsvvError::UnknownVersion(version.clone()));
        }

        let body = girdin::read_girdin(&lines[consumed..])?;
        Ok(Csvv { header, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(version: &str) -> String {
        format!(
            "---\n\
             csvv-version: {version}\n\
             variables:\n\
             \x20 gamma: coefficients [1/C]\n\
             ...\n\
             observations\n\
             10\n\
             prednames\n\
             tas\n\
             covarnames\n\
             1\n\
             gamma\n\
             0.25\n\
             gammavcv\n\
             0.01\n\
             residvcv\n\
             0.5\n"
        )
    }

    #[test]
    fn test_parse_supported_version() {
        let csvv = Csvv::parse(&sample(SUPPORTED_VERSION)).unwrap();
        assert_eq!(csvv.body.gamma, vec![0.25]);
        assert_eq!(
            csvv.header.variables["gamma"].unit.as_deref(),
            Some("1/C")
        );
    }

    #[test]
    fn test_unknown_version_is_fatal() {
        let err = Csvv::parse(&sample("girdin-2099-01-01")).unwrap_err();
        assert!(matches!(err, CsvvError::UnknownVersion(_)));
    }

    #[test]
    fn test_missing_version_is_fatal() {
        let text = "---\noneline: no version here\n...\nobservations\n1\n";
        assert!(matches!(
            Csvv::parse(text),
            Err(CsvvError::MissingVersion)
        ));
    }
}
