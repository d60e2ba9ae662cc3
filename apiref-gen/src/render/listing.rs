use apiref_core::Indent;

use crate::{Endpoint, builder::CodeBuilder};

/// Render one signature line per endpoint, with the tagline indented below.
///
/// ```text
/// /api/v1/add <path> [--pin]
///   Add a file
/// /api/v1/id
/// ```
pub fn listing(endpoints: &[Endpoint]) -> String {
    CodeBuilder::new(Indent::LISTING)
        .each(endpoints, |b, endpoint| {
            b.line(&signature(endpoint))
                .when(!endpoint.description.is_empty(), |b| {
                    b.indent().line(&endpoint.description).dedent()
                })
        })
        .build()
}

/// `name <required> [optional] [--opt ...]`
fn signature(endpoint: &Endpoint) -> String {
    let mut parts = vec![endpoint.name.clone()];

    for arg in &endpoint.arguments {
        if arg.required {
            parts.push(format!("<{}>", arg.name));
        } else {
            parts.push(format!("[{}]", arg.name));
        }
    }

    if !endpoint.options.is_empty() {
        let flags: Vec<String> = endpoint
            .options
            .iter()
            .map(|opt| format!("--{}", opt.name))
            .collect();
        parts.push(format!("[{}]", flags.join(" ")));
    }

    parts.join(" ")
}
