//! Query and response envelope for `GET /lookup`.

use crate::Address;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of a lookup request.
///
/// Both parameters are optional at the wire level so that a missing parameter can be
/// reported with the same message as an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupParams {
    /// Postcode, at least 4 digits.
    pub postcode: Option<String>,
    /// Street number, digits only.
    pub streetnumber: Option<String>,
}

impl LookupParams {
    /// Collects parameters from raw query pairs.
    ///
    /// A parameter given more than once is joined with `,`, so `postcode=1&postcode=2`
    /// reads as `"1,2"` and fails digit validation instead of the request being refused.
    /// Unknown keys are ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        fn append(slot: &mut Option<String>, value: &str) {
            match slot {
                Some(joined) => {
                    joined.push(',');
                    joined.push_str(value);
                }
                None => *slot = Some(value.to_owned()),
            }
        }

        let mut params = Self::default();
        for (key, value) in pairs {
            match key {
                "postcode" => append(&mut params.postcode, value),
                "streetnumber" => append(&mut params.streetnumber, value),
                _ => {}
            }
        }
        params
    }
}

/// Response body of a lookup request.
///
/// Serialises as `{"status":"ok","details":[...]}` or
/// `{"status":"error","errormessage":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LookupRes {
    Ok { details: Vec<Address> },
    Error { errormessage: String },
}

impl LookupRes {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            errormessage: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_matches_wire_format() {
        let json = serde_json::to_value(LookupRes::error("No results found!")).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({"status": "error", "errormessage": "No results found!"})
        );
    }

    #[test]
    fn repeated_parameters_are_joined() {
        let params = LookupParams::from_pairs([
            ("postcode", "1234"),
            ("other", "x"),
            ("postcode", "5678"),
            ("streetnumber", "1"),
        ]);
        assert_eq!(params.postcode.as_deref(), Some("1234,5678"));
        assert_eq!(params.streetnumber.as_deref(), Some("1"));
        assert_eq!(LookupParams::from_pairs([]), LookupParams::default());
    }

    #[test]
    fn ok_envelope_parses_details() {
        let raw = r#"{"status":"ok","details":[{"id":"1","street":"S","city":"C","postcode":"1234"}]}"#;
        match serde_json::from_str::<LookupRes>(raw).expect("parse") {
            LookupRes::Ok { details } => assert_eq!(details.len(), 1),
            other => panic!("expected Ok envelope, got {other:?}"),
        }
    }
}
