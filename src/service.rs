//! JSON request/response adapter in front of a built [`KNNRegressor`].
//!
//! A request names the three percentages and optionally a neighbor count:
//!
//! ```text
//!   {"attendance": 90, "homework": 85, "testscore": 80, "k": 3}
//! ```
//!
//! A success reply is `{"predicted": <f64>}`. Malformed JSON and every prediction error produce
//! the same generic reply, `{"error": "invalid input"}`.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::data::STUDENT_FEATURES;
use crate::error::{KnnError, Result};
use crate::ml::KNNRegressor;

/// Reply text for any request that cannot be answered.
pub const INVALID_INPUT: &str = "invalid input";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictRequest {
    pub attendance: f64,
    pub homework: f64,
    #[serde(rename = "testscore")]
    pub test_score: f64,
    #[serde(default)]
    pub k: Option<usize>,
}

impl PredictRequest {
    pub fn features(&self) -> [f64; STUDENT_FEATURES] {
        [self.attendance, self.homework, self.test_score]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Predicted { predicted: f64 },
    Error { error: String },
}

impl PredictResponse {
    pub fn invalid_input() -> Self {
        Self::Error {
            error: INVALID_INPUT.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Answers prediction requests against one immutable regressor.
///
/// `handle` takes `&self`, so a service can be wrapped in an `Arc` and used from many threads.
#[derive(Debug, Clone)]
pub struct PredictionService {
    regressor: KNNRegressor,
    default_k: usize,
}

impl PredictionService {
    pub fn new(regressor: KNNRegressor, default_k: usize) -> Self {
        Self {
            regressor,
            default_k,
        }
    }

    pub fn regressor(&self) -> &KNNRegressor {
        &self.regressor
    }

    pub fn default_k(&self) -> usize {
        self.default_k
    }

    /// Predicts for a parsed request, falling back to the default k.
    pub fn handle(&self, request: &PredictRequest) -> std::result::Result<f64, KnnError> {
        let k = request.k.unwrap_or(self.default_k);
        self.regressor.predict(&request.features(), k)
    }

    /// Parses one JSON request and builds the reply.
    pub fn respond(&self, body: &str) -> PredictResponse {
        let outcome = serde_json::from_str::<PredictRequest>(body)
            .map_err(|e| e.to_string())
            .and_then(|request| self.handle(&request).map_err(|e| e.to_string()));

        match outcome {
            Ok(predicted) => PredictResponse::Predicted { predicted },
            Err(reason) => {
                log::debug!("rejecting request: {reason}");
                PredictResponse::invalid_input()
            }
        }
    }

    /// Like [`respond`](Self::respond) for a raw body. Bodies that are not UTF-8 are rejected.
    pub fn respond_bytes(&self, body: &[u8]) -> PredictResponse {
        match std::str::from_utf8(body) {
            Ok(text) => self.respond(text),
            Err(e) => {
                log::debug!("rejecting request: {e}");
                PredictResponse::invalid_input()
            }
        }
    }

    /// Like [`respond`](Self::respond), serialized to a JSON string.
    pub fn handle_json(&self, body: &str) -> Result<String> {
        Ok(serde_json::to_string(&self.respond(body))?)
    }

    /// Answers one request per non-blank line of `reader`, writing one reply line each.
    ///
    /// Lines that are not valid UTF-8 get the invalid-input reply. Only I/O errors end the loop.
    /// Returns the number of requests answered.
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut answered = 0;
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            serde_json::to_writer(&mut writer, &self.respond_bytes(&line))?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            answered += 1;
        }
        log::info!("answered {answered} requests");
        Ok(answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{LabeledPoint, ReferenceStore};

    fn service() -> PredictionService {
        let store = ReferenceStore::new(vec![
            LabeledPoint::new(vec![90.0, 80.0, 70.0], 82.0),
            LabeledPoint::new(vec![60.0, 60.0, 60.0], 60.0),
            LabeledPoint::new(vec![95.0, 90.0, 85.0], 91.0),
        ])
        .unwrap();
        PredictionService::new(KNNRegressor::new(store), 2)
    }

    #[test]
    fn test_handle_json_prediction() {
        let reply = service()
            .handle_json(r#"{"attendance": 92, "homework": 85, "testscore": 80}"#)
            .unwrap();
        assert_eq!(reply, r#"{"predicted":86.5}"#);
    }

    #[test]
    fn test_request_k_overrides_default() {
        let svc = service();
        let reply = svc.respond(r#"{"attendance": 92, "homework": 85, "testscore": 80, "k": 1}"#);
        assert_eq!(reply, PredictResponse::Predicted { predicted: 91.0 });
    }

    #[test]
    fn test_invalid_requests() {
        let svc = service();
        let invalid = PredictResponse::invalid_input();
        assert_eq!(svc.respond("not json"), invalid);
        assert_eq!(svc.respond(r#"{"attendance": 92, "homework": 85}"#), invalid);
        assert_eq!(
            svc.respond(r#"{"attendance": 92, "homework": 85, "testscore": 80, "k": 0}"#),
            invalid
        );
        assert_eq!(
            svc.handle_json("{}").unwrap(),
            r#"{"error":"invalid input"}"#
        );
    }

    #[test]
    fn test_handle_reports_typed_errors() {
        let empty = PredictionService::new(KNNRegressor::new(ReferenceStore::default()), 5);
        let request = PredictRequest {
            attendance: 90.0,
            homework: 85.0,
            test_score: 80.0,
            k: None,
        };
        assert_eq!(empty.handle(&request), Err(KnnError::EmptyReferenceStore));
    }

    #[test]
    fn test_serve_lines() {
        let input = "{\"attendance\": 92, \"homework\": 85, \"testscore\": 80}\n\nbad\n";
        let mut out = Vec::new();
        let answered = service().serve(input.as_bytes(), &mut out).unwrap();
        assert_eq!(answered, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"predicted\":86.5}\n{\"error\":\"invalid input\"}\n"
        );
    }

    #[test]
    fn test_serve_survives_non_utf8_line() {
        let mut input = b"\xff\xfe\n".to_vec();
        input.extend_from_slice(b"{\"attendance\": 92, \"homework\": 85, \"testscore\": 80}\r\n");
        let mut out = Vec::new();
        let answered = service().serve(input.as_slice(), &mut out).unwrap();
        assert_eq!(answered, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"error\":\"invalid input\"}\n{\"predicted\":86.5}\n"
        );
    }

    #[test]
    fn test_respond_bytes() {
        let svc = service();
        assert!(svc.respond_bytes(b"\xc3\x28").is_error());
        assert_eq!(
            svc.respond_bytes(br#"{"attendance": 92, "homework": 85, "testscore": 80, "k": 1}"#),
            PredictResponse::Predicted { predicted: 91.0 }
        );
    }
}
