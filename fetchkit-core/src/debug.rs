use http::HeaderMap;

use crate::contract::{Contract, ParameterEncoding};
use crate::error::Error;
use crate::request::RequestDescriptor;
use crate::transport::ResponseOutcome;

/// Emit the per-call diagnostic block when the contract enables debug.
///
/// Structure is fixed for parity with existing tooling: a cURL
/// reproduction line, then a YAML-like request block, then either the
/// response block or the error block.
pub(crate) fn log_exchange(
    contract: &Contract,
    request: &RequestDescriptor,
    outcome: std::result::Result<&ResponseOutcome, &Error>,
) {
    if !contract.debug {
        return;
    }
    let response_block = match outcome {
        Ok(outcome) => yaml_response(outcome),
        Err(error) => yaml_error(error),
    };
    log::debug!(
        "\n#######################\n####### fetchkit ######\n#######################\n# cURL format:\n# {}\n#######################\n# YAML format:\n{}\n{}\n#######################",
        curl_line(request, &contract.encoding),
        yaml_request(request),
        response_block,
    );
}

/// YAML-like rendering of a built request.
pub fn yaml_request(request: &RequestDescriptor) -> String {
    format!(
        "Request:\n  Method: {}\n  URL: {}\n  CachePolicy: {:?}\n  Header:\n{}\n  Body: {}",
        request.method,
        request.url,
        request.cache_policy,
        header_lines(&request.headers),
        body_text(request.body.as_deref()),
    )
}

/// YAML-like rendering of a raw response.
pub fn yaml_response(outcome: &ResponseOutcome) -> String {
    let code = match outcome.status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    };
    format!(
        "Response:\n  Code: {}\n  Header:\n{}\n  Body: {}",
        code,
        header_lines(&outcome.headers),
        body_text(Some(&outcome.body)),
    )
}

/// YAML-like rendering of a structured error, with the raw payload
/// appended for the variants that retain one.
pub fn yaml_error(error: &Error) -> String {
    let mut block = format!("Response:\n  Error: {error}");
    if let Error::Decoding { data, .. } | Error::StatusCode { data, .. } = error {
        block.push_str(", JSON: ");
        block.push_str(&String::from_utf8_lossy(data));
    }
    block
}

/// Command-line reproduction of a built request.
pub fn curl_line(request: &RequestDescriptor, encoding: &ParameterEncoding) -> String {
    let mut parts = vec!["curl".to_string(), format!("-X {}", request.method)];
    for (name, value) in request.headers.iter() {
        parts.push(format!("-H '{}: {}'", name, value.to_str().unwrap_or("<binary>")));
    }
    if let Some(body) = request.body.as_deref() {
        let body = String::from_utf8_lossy(body);
        if matches!(encoding, ParameterEncoding::FormUrl) {
            for pair in body.split('&').filter(|pair| !pair.is_empty()) {
                parts.push(format!("-F {pair}"));
            }
        } else {
            parts.push(format!("-d '{body}'"));
        }
    }
    parts.push(request.url.to_string());
    parts.join(" ")
}

fn header_lines(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("    {}: {}", name, value.to_str().unwrap_or("<binary>")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn body_text(body: Option<&[u8]>) -> String {
    match body {
        Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{Contract, Method, NoParameters, ParameterEncoding};
    use crate::request::build_request;

    fn descriptor(encoding: ParameterEncoding) -> RequestDescriptor {
        #[derive(serde::Serialize)]
        struct Body {
            name: String,
            count: u32,
        }
        let contract = Contract::new("https://api.example.com", Method::Post)
            .with_encoding(encoding)
            .with_debug(false);
        build_request(
            &contract,
            "submit",
            None::<&NoParameters>,
            Some(&Body { name: "owl".into(), count: 2 }),
            None::<&NoParameters>,
        )
        .unwrap()
    }

    #[test]
    fn request_block_carries_method_url_and_headers() {
        let block = yaml_request(&descriptor(ParameterEncoding::Json));
        assert!(block.starts_with("Request:\n  Method: POST\n  URL: https://api.example.com/submit"));
        assert!(block.contains("    accept: application/json"));
        assert!(block.contains("  Body: {"));
    }

    #[test]
    fn curl_line_uses_d_for_json_bodies() {
        let request = descriptor(ParameterEncoding::Json);
        let line = curl_line(&request, &ParameterEncoding::Json);
        assert!(line.starts_with("curl -X POST"));
        assert!(line.contains("-d '{"));
        assert!(line.ends_with("https://api.example.com/submit"));
    }

    #[test]
    fn curl_line_uses_form_pairs_for_form_bodies() {
        let request = descriptor(ParameterEncoding::FormUrl);
        let line = curl_line(&request, &ParameterEncoding::FormUrl);
        assert!(line.contains("-F name=owl"));
        assert!(line.contains("-F count=2"));
        assert!(!line.contains("-d"));
    }

    #[test]
    fn error_block_appends_the_retained_payload() {
        let error = Error::StatusCode {
            code: 401,
            data: b"denied".to_vec(),
            headers: HeaderMap::new(),
        };
        let block = yaml_error(&error);
        assert!(block.contains("Error: unexpected status code 401"));
        assert!(block.contains("JSON: denied"));
    }
}
