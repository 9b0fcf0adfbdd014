use std::convert::Infallible;

use rocket::request::FromParam;

/// the only version that is answered with data
pub const CURRENT_VERSION: &str = "v1.0";

/// # Version segment of a request path
/// every value parses, routes answer an unsupported version with an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V1,
    Unsupported,
}

impl ApiVersion {
    pub fn parse(segment: &str) -> ApiVersion {
        if segment == CURRENT_VERSION {
            ApiVersion::V1
        } else {
            ApiVersion::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        *self == ApiVersion::V1
    }
}

impl<'a> FromParam<'a> for ApiVersion {
    type Error = Infallible;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Ok(ApiVersion::parse(param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_current_version_is_supported() {
        assert!(ApiVersion::parse("v1.0").is_supported());

        for segment in ["v1", "v2.0", "V1.0", "latest", ""] {
            assert_eq!(ApiVersion::parse(segment), ApiVersion::Unsupported, "{segment}");
        }
    }

    #[test]
    fn any_segment_is_accepted_as_a_param() {
        assert_eq!(ApiVersion::from_param("v1.0"), Ok(ApiVersion::V1));
        assert_eq!(ApiVersion::from_param("v9"), Ok(ApiVersion::Unsupported));
    }
}
